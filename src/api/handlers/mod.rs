//! HTTP request handlers.

pub mod auth_handler;
pub mod catalog_handler;
pub mod engagement_handler;
pub mod profile_handler;
pub mod property_handler;

pub use auth_handler::auth_routes;
pub use catalog_handler::catalog_routes;
pub use engagement_handler::engagement_routes;
pub use profile_handler::profile_routes;
pub use property_handler::property_routes;

use crate::errors::AppError;

/// Answer to a collection-level PUT, which has no record to replace.
fn missing_id(entity: &str) -> AppError {
    AppError::bad_request(format!("Please provide a valid {} ID.", entity))
}
