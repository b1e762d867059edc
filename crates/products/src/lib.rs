//! `shelfline-products` — pure product domain: records, payloads, validation.

pub mod category;
pub mod product;
pub mod validation;

pub use category::{Category, CategoryDescriptor};
pub use product::{Product, ProductDraft, ProductPatch};
pub use validation::{validate_draft, validate_patch};
