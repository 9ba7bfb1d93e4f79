//! Custom request extractors.

mod path;
mod validated_json;

pub use path::Path;
pub use validated_json::ValidatedJson;
