//! Application configuration module
//!
//! Environment-driven settings plus the constants shared by validation,
//! token issuing and server startup.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
