//! `shelfline-catalog` — the inventory consistency service.
//!
//! Four collaborating components over injected store handles:
//!
//! - [`CategoryDirectory`] — read-only lookup of valid categories.
//! - [`ProductCatalog`] — product writes enforcing SKU uniqueness and
//!   category existence.
//! - [`search`] — case-insensitive substring match over name/sku, a derived
//!   view with no state of its own.
//! - [`InventoryLedger`] — the sell path, linearizable per product with
//!   respect to stock.

pub mod catalog;
pub mod directory;
pub mod ledger;
pub mod search;

pub use catalog::{DeletionResult, ProductCatalog, SearchResults};
pub use directory::CategoryDirectory;
pub use ledger::InventoryLedger;
