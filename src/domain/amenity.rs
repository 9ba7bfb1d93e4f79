//! Amenity catalogue entries and their links to properties.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Amenity {
    pub id: i32,
    #[schema(example = "Swimming pool")]
    pub name: String,
    #[schema(example = "pool")]
    pub icon: Option<String>,
}

/// Create/replace payload for an amenity
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AmenityInput {
    #[validate(
        length(max = 100, message = "Ensure this field has no more than 100 characters."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Swimming pool")]
    pub name: String,
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    #[schema(example = "pool")]
    pub icon: Option<String>,
}

/// Link recording that a property offers an amenity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropertyAmenity {
    pub id: i32,
    #[serde(rename = "property")]
    pub property_id: i32,
    #[serde(rename = "amenity")]
    pub amenity_id: i32,
    pub notes: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Create/replace payload for a property-amenity link
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PropertyAmenityInput {
    #[serde(rename = "property")]
    #[schema(example = 1)]
    pub property_id: i32,
    #[serde(rename = "amenity")]
    #[schema(example = 1)]
    pub amenity_id: i32,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_uses_short_field_names() {
        let input: PropertyAmenityInput =
            serde_json::from_str(r#"{"property": 4, "amenity": 9, "notes": "heated"}"#).unwrap();
        assert_eq!(input.property_id, 4);
        assert_eq!(input.amenity_id, 9);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_icon_length_limit() {
        let input = AmenityInput {
            name: "Gym".to_string(),
            icon: Some("x".repeat(51)),
        };
        assert!(input.validate().unwrap_err().field_errors().contains_key("icon"));
    }
}
