//! Shared response helpers for handlers.

mod response;

pub use response::{Created, NoContent};
