//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, stock rules). Infrastructure faults enter through `Storage` and
/// carry no structure the caller could act on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more input fields failed validation. All applicable messages
    /// are collected, not just the first.
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// The request shape itself was malformed (empty id set, non-positive
    /// quantity, blank keyword).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A sell asked for more units than are on hand.
    #[error("only {available} item(s) left in stock")]
    InsufficientStock { available: i64 },

    /// Failure originating from the persistence layer, not attributable to
    /// caller input. Not locally recoverable; no retry at this layer.
    #[error("storage fault: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(errors: Vec<String>) -> Self {
        Self::ValidationFailed(errors)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn insufficient_stock(available: i64) -> Self {
        Self::InsufficientStock { available }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_states_available_quantity() {
        let err = DomainError::insufficient_stock(5);
        assert_eq!(err.to_string(), "only 5 item(s) left in stock");
    }

    #[test]
    fn validation_message_joins_all_errors() {
        let err = DomainError::validation(vec![
            "name must not be empty".to_string(),
            "price must be greater than 0".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: name must not be empty; price must be greater than 0"
        );
    }
}
