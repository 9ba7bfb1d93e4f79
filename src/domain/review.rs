//! Property reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::validate_not_blank;
use crate::config::{MAX_RATING, MIN_RATING};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: i32,
    #[serde(rename = "property")]
    pub property_id: i32,
    /// Profile that wrote the review
    #[serde(rename = "reviewer")]
    pub reviewer_id: i32,
    #[schema(example = 4)]
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub is_approved: bool,
    /// Reply from the owner
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/replace payload; the reviewer is always the caller
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ReviewInput {
    #[serde(rename = "property")]
    #[schema(example = 1)]
    pub property_id: i32,
    #[validate(range(
        min = MIN_RATING,
        max = MAX_RATING,
        message = "Ensure the rating is between 1 and 5."
    ))]
    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub rating: i32,
    #[validate(
        length(max = 100, message = "Ensure this field has no more than 100 characters."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Quiet and clean")]
    pub title: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub comment: String,
    #[serde(default)]
    pub is_approved: bool,
    pub response: Option<String>,
}

impl ReviewInput {
    /// Drop moderation fields the reviewer may not set. They keep the stored
    /// values of `existing`, or start unapproved with no reply.
    pub fn into_reviewer_edit(self, existing: Option<&Review>) -> Self {
        Self {
            is_approved: existing.is_some_and(|r| r.is_approved),
            response: existing.and_then(|r| r.response.clone()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rating: i32) -> ReviewInput {
        ReviewInput {
            property_id: 1,
            rating,
            title: "Nice".to_string(),
            comment: "Would stay again".to_string(),
            is_approved: false,
            response: None,
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(input(1).validate().is_ok());
        assert!(input(5).validate().is_ok());
        assert!(input(0).validate().unwrap_err().field_errors().contains_key("rating"));
        assert!(input(6).validate().unwrap_err().field_errors().contains_key("rating"));
    }

    #[test]
    fn test_reviewer_cannot_moderate() {
        let mut attempt = input(5);
        attempt.is_approved = true;
        attempt.response = Some("Thanks!".to_string());

        let fresh = attempt.clone().into_reviewer_edit(None);
        assert!(!fresh.is_approved);
        assert!(fresh.response.is_none());

        let stored = Review {
            id: 3,
            property_id: 1,
            reviewer_id: 2,
            rating: 4,
            title: "Nice".to_string(),
            comment: "Would stay again".to_string(),
            is_approved: true,
            response: Some("Glad you liked it".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        attempt.is_approved = false;
        let edited = attempt.into_reviewer_edit(Some(&stored));
        assert!(edited.is_approved);
        assert_eq!(edited.response.as_deref(), Some("Glad you liked it"));
        assert_eq!(edited.rating, 5);
    }
}
