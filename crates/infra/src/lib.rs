//! `shelfline-infra` — store abstractions and in-memory implementations.
//!
//! Components receive explicit store handles at construction; there is no
//! global connection state. Every trait method is async: store I/O is the
//! only suspension point in the system.

pub mod category_store;
pub mod product_store;

use thiserror::Error;

pub use category_store::{CategoryStore, InMemoryCategoryStore};
pub use product_store::{DecrementOutcome, InMemoryProductStore, ProductStore};

/// Infrastructure failure from the persistence layer. Opaque to the domain;
/// surfaced to callers as a storage fault with no retry at this layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl From<StoreError> for shelfline_core::DomainError {
    fn from(err: StoreError) -> Self {
        shelfline_core::DomainError::Storage(err.0)
    }
}
