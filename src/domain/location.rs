//! Location: the address a property is listed under.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub id: i32,
    #[schema(example = "Kenya")]
    pub country: String,
    #[schema(example = "Nairobi County")]
    pub region: String,
    #[schema(example = "Nairobi")]
    pub city: String,
    #[schema(example = "Westlands")]
    pub district: Option<String>,
    #[schema(example = "Waiyaki Way")]
    pub street: Option<String>,
}

impl Location {
    /// Street-first, comma separated, skipping empty parts.
    pub fn display_name(&self) -> String {
        [
            self.street.as_deref(),
            self.district.as_deref(),
            Some(self.city.as_str()),
            Some(self.region.as_str()),
            Some(self.country.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Create/replace payload for a location
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LocationInput {
    #[validate(
        length(max = 100, message = "Ensure this field has no more than 100 characters."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Kenya")]
    pub country: String,
    #[validate(
        length(max = 100, message = "Ensure this field has no more than 100 characters."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Nairobi County")]
    pub region: String,
    #[validate(
        length(max = 100, message = "Ensure this field has no more than 100 characters."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Nairobi")]
    pub city: String,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub district: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub street: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_skips_missing_parts() {
        let location = Location {
            id: 1,
            country: "Kenya".to_string(),
            region: "Nairobi County".to_string(),
            city: "Nairobi".to_string(),
            district: None,
            street: Some("Waiyaki Way".to_string()),
        };
        assert_eq!(
            location.display_name(),
            "Waiyaki Way, Nairobi, Nairobi County, Kenya"
        );
    }

    #[test]
    fn test_blank_city_rejected() {
        let input = LocationInput {
            country: "Kenya".to_string(),
            region: "Coast".to_string(),
            city: "  ".to_string(),
            district: None,
            street: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("city"));
    }
}
