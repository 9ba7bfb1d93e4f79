//! Saved properties.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A property saved by a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    /// Profile that saved the property
    #[serde(rename = "user")]
    pub user_id: i32,
    #[serde(rename = "property")]
    pub property_id: i32,
    pub notes: Option<String>,
    pub date_added: DateTime<Utc>,
}

/// Create/replace payload; the owner is always the caller
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FavoriteInput {
    #[serde(rename = "property")]
    #[schema(example = 1)]
    pub property_id: i32,
    #[validate(length(max = 1000, message = "Ensure this field has no more than 1000 characters."))]
    pub notes: Option<String>,
}
