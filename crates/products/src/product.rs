use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfline_core::ProductId;

use crate::category::{Category, CategoryDescriptor};

/// A persisted product record.
///
/// `category` is an embedded snapshot stamped at write time, not a live
/// reference; later category changes do not rewrite existing products.
/// `created_at` is set once at creation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Invariant check used by tests and the catalog's own assertions:
    /// price strictly positive, stock never negative.
    pub fn is_consistent(&self) -> bool {
        self.price > 0.0 && self.stock >= 0
    }
}

/// Candidate payload for product creation. Every field is optional so the
/// validation policy can distinguish "missing" from "present but invalid" —
/// in particular `stock: Some(0)` is a legitimate value, not an absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<CategoryDescriptor>,
}

/// Partial update payload. Absent fields are left untouched; present fields
/// are validated and applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<CategoryDescriptor>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.sku.is_none()
            && self.name.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category.is_none()
    }

    /// Apply the non-category fields onto an existing record. The category
    /// snapshot is resolved by the catalog before this is called.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(sku) = &self.sku {
            product.sku = sku.clone();
        }
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}
