//! Mapping from domain errors to the status codes and error bodies a
//! transport layer would emit.

use serde_json::{Value, json};

use shelfline_core::DomainError;

/// HTTP-equivalent status code for a domain error.
pub fn status_code(err: &DomainError) -> u16 {
    match err {
        DomainError::ValidationFailed(_)
        | DomainError::BadRequest(_)
        | DomainError::InsufficientStock { .. } => 400,
        DomainError::NotFound => 404,
        DomainError::Storage(_) => 500,
    }
}

/// Structured error body. Validation failures carry the full message list;
/// storage faults are opaque to the caller.
pub fn error_body(err: &DomainError) -> Value {
    match err {
        DomainError::ValidationFailed(errors) => json!({ "errors": errors }),
        DomainError::Storage(_) => json!({ "message": "Server error" }),
        other => json!({ "error": other.to_string() }),
    }
}
