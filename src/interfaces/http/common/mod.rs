//! Shared HTTP plumbing: response envelope and validated extractor

pub mod response;
pub mod validated_json;

pub use response::{domain_error, status_for, ApiResponse};
pub use validated_json::ValidatedJson;
