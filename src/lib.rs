//! Estate API - real-estate listing backend
//!
//! Profiles, properties with type-specific details (land, rental,
//! apartment, campus hostel), amenities, images, favorites, inquiries and
//! reviews over a JSON HTTP API with bearer-token authentication.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, request payloads and their validation rules
//! - **services**: Use cases over the unit of work
//! - **infra**: Database connection, migrations, repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 8000
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Password, Property, PropertyDetails, PropertyType};
pub use errors::{AppError, AppResult};
pub use infra::Database;
