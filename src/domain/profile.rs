//! Profile: the listing-facing extension of a user account.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::choices::UserType;
use super::validation::PHONE_PATTERN;

/// Profile attached 1:1 to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: i32,
    /// Owning user id
    #[serde(rename = "user")]
    pub user_id: i32,
    pub user_type: UserType,
    pub bio: Option<String>,
    /// Path of the uploaded picture in file storage
    pub profile_picture: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub identity_verified: bool,
    pub website: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub created_by: Option<i32>,
    pub modified_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a profile created alongside its user.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub user_id: i32,
    pub user_type: UserType,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub phone_number: Option<String>,
}

impl NewProfile {
    /// Profile factory used during registration.
    pub fn for_user(
        user_id: i32,
        bio: Option<String>,
        profile_picture: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            user_id,
            user_type: UserType::default(),
            bio,
            profile_picture,
            phone_number,
        }
    }
}

/// Replacement payload for `PUT /api/profile/{id}/`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ProfileInput {
    #[serde(default)]
    pub user_type: UserType,
    #[validate(length(max = 500, message = "Ensure this field has no more than 500 characters."))]
    pub bio: Option<String>,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub profile_picture: Option<String>,
    #[validate(regex(path = *PHONE_PATTERN, message = "Enter a valid phone number."))]
    pub phone_number: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "1990-04-01")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub phone_verified: bool,
    #[serde(default)]
    pub identity_verified: bool,
    #[validate(url(message = "Enter a valid URL."))]
    pub website: Option<String>,
    #[validate(url(message = "Enter a valid URL."))]
    pub facebook_url: Option<String>,
    #[validate(url(message = "Enter a valid URL."))]
    pub twitter_url: Option<String>,
    #[validate(url(message = "Enter a valid URL."))]
    pub linkedin_url: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub country: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub city: Option<String>,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub address: Option<String>,
    pub created_by: Option<i32>,
    pub modified_by: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_defaults_to_tenant() {
        let profile = NewProfile::for_user(3, Some("hi".to_string()), None, None);
        assert_eq!(profile.user_id, 3);
        assert_eq!(profile.user_type, UserType::Tenant);
        assert_eq!(profile.bio.as_deref(), Some("hi"));
    }

    #[test]
    fn test_input_rejects_bad_url_and_phone() {
        let input = ProfileInput {
            website: Some("not a url".to_string()),
            phone_number: Some("call me".to_string()),
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("website"));
        assert!(fields.contains_key("phone_number"));
    }

    #[test]
    fn test_input_defaults_from_empty_body() {
        let input: ProfileInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.user_type, UserType::Tenant);
        assert!(!input.email_verified);
        assert!(input.validate().is_ok());
    }
}
