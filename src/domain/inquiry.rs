//! Inquiries sent by prospective tenants or buyers about a property.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::choices::InquiryStatus;
use super::validation::{validate_not_blank, PHONE_PATTERN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Inquiry {
    pub id: i32,
    #[serde(rename = "property")]
    pub property_id: i32,
    /// Profile that sent the inquiry
    #[serde(rename = "user")]
    pub user_id: i32,
    pub message: String,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub status: InquiryStatus,
    pub response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub date_sent: DateTime<Utc>,
}

impl Inquiry {
    /// When `responded_at` should be after moving to `next`.
    ///
    /// Entering RESPONDED stamps the current time; staying RESPONDED keeps the
    /// original stamp; any other status leaves the previous value untouched.
    pub fn responded_at_after(
        &self,
        next: InquiryStatus,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        stamp_response(Some(self.status), self.responded_at, next, now)
    }
}

/// Shared by create (no previous status) and update.
pub fn stamp_response(
    previous: Option<InquiryStatus>,
    responded_at: Option<DateTime<Utc>>,
    next: InquiryStatus,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (previous, next) {
        (Some(InquiryStatus::Responded), InquiryStatus::Responded) => responded_at.or(Some(now)),
        (_, InquiryStatus::Responded) => Some(now),
        _ => responded_at,
    }
}

/// Create/replace payload; the sender is always the caller on create
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InquiryInput {
    #[serde(rename = "property")]
    #[schema(example = 1)]
    pub property_id: i32,
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Is the flat still available?")]
    pub message: String,
    #[validate(regex(path = *PHONE_PATTERN, message = "Enter a valid phone number."))]
    pub contact_phone: Option<String>,
    #[validate(email(message = "Enter a valid email address."))]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub status: InquiryStatus,
    pub response: Option<String>,
}

impl InquiryInput {
    /// Reply from the property owner: only `status` and `response` are
    /// taken, everything the sender wrote stays as it was.
    pub fn into_reply_to(self, existing: &Inquiry) -> Self {
        Self {
            property_id: existing.property_id,
            message: existing.message.clone(),
            contact_phone: existing.contact_phone.clone(),
            contact_email: existing.contact_email.clone(),
            status: self.status,
            response: self.response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn inquiry(status: InquiryStatus, responded_at: Option<DateTime<Utc>>) -> Inquiry {
        Inquiry {
            id: 1,
            property_id: 1,
            user_id: 2,
            message: "Still available?".to_string(),
            contact_phone: None,
            contact_email: None,
            status,
            response: None,
            responded_at,
            date_sent: Utc::now(),
        }
    }

    #[test]
    fn test_responding_stamps_time() {
        let now = Utc::now();
        let pending = inquiry(InquiryStatus::Pending, None);
        assert_eq!(pending.responded_at_after(InquiryStatus::Responded, now), Some(now));
    }

    #[test]
    fn test_repeat_response_keeps_first_stamp() {
        let first = Utc::now() - Duration::hours(2);
        let answered = inquiry(InquiryStatus::Responded, Some(first));
        assert_eq!(
            answered.responded_at_after(InquiryStatus::Responded, Utc::now()),
            Some(first)
        );
    }

    #[test]
    fn test_pending_stays_unstamped() {
        let pending = inquiry(InquiryStatus::Pending, None);
        assert_eq!(pending.responded_at_after(InquiryStatus::Closed, Utc::now()), None);
    }

    #[test]
    fn test_created_as_responded_is_stamped() {
        let now = Utc::now();
        assert_eq!(
            stamp_response(None, None, InquiryStatus::Responded, now),
            Some(now)
        );
    }

    #[test]
    fn test_input_rejects_bad_email() {
        let input: InquiryInput = serde_json::from_str(
            r#"{"property": 1, "message": "hello", "contact_email": "nope"}"#,
        )
        .unwrap();
        assert_eq!(input.status, InquiryStatus::Pending);
        assert!(input
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("contact_email"));
    }

    #[test]
    fn test_reply_keeps_sender_fields() {
        let mut sent = inquiry(InquiryStatus::Pending, None);
        sent.contact_email = Some("tenant@example.com".to_string());
        let input = InquiryInput {
            property_id: 9,
            message: "rewritten".to_string(),
            contact_phone: None,
            contact_email: None,
            status: InquiryStatus::Responded,
            response: Some("Yes".to_string()),
        };

        let reply = input.into_reply_to(&sent);

        assert_eq!(reply.property_id, 1);
        assert_eq!(reply.message, "Still available?");
        assert_eq!(reply.contact_email.as_deref(), Some("tenant@example.com"));
        assert_eq!(reply.status, InquiryStatus::Responded);
        assert_eq!(reply.response.as_deref(), Some("Yes"));
    }
}
