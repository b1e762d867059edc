//! Shared input-validation rules for product payloads.
//!
//! Pure functions, no store access. Every applicable rule is evaluated and
//! its message collected — callers get the full list, not just the first
//! failure. SKU uniqueness needs the catalog's store and is checked there.

use crate::product::{ProductDraft, ProductPatch};

pub const NAME_EMPTY: &str = "name must not be empty";
pub const SKU_EMPTY: &str = "sku must not be empty";
pub const SKU_TOO_SHORT: &str = "sku must be at least 3 characters";
pub const PRICE_NOT_POSITIVE: &str = "price must be greater than 0";
pub const STOCK_NEGATIVE: &str = "stock must not be negative";
pub const CATEGORY_REQUIRED: &str = "category is required";

pub const QUANTITY_NOT_POSITIVE: &str = "quantity must be positive";

const MIN_SKU_LEN: usize = 3;

/// Validate a creation payload. Empty vec means valid.
///
/// Field order is fixed (name, sku, price, stock, category) so error lists
/// are deterministic.
pub fn validate_draft(draft: &ProductDraft) -> Vec<String> {
    let mut errors = Vec::new();

    check_name(draft.name.as_deref(), &mut errors);
    check_sku(draft.sku.as_deref(), &mut errors);
    check_price(draft.price, &mut errors);
    check_stock(draft.stock, &mut errors);

    if draft.category.as_ref().is_none_or(|c| c.is_empty()) {
        errors.push(CATEGORY_REQUIRED.to_string());
    }

    errors
}

/// Relaxed variant for partial updates: only fields present in the patch are
/// checked. An absent field is "leave untouched", never "missing".
pub fn validate_patch(patch: &ProductPatch) -> Vec<String> {
    let mut errors = Vec::new();

    if patch.name.is_some() {
        check_name(patch.name.as_deref(), &mut errors);
    }
    if patch.sku.is_some() {
        check_sku(patch.sku.as_deref(), &mut errors);
    }
    if patch.price.is_some() {
        check_price(patch.price, &mut errors);
    }
    if patch.stock.is_some() {
        check_stock(patch.stock, &mut errors);
    }
    if let Some(category) = &patch.category
        && category.is_empty()
    {
        errors.push(CATEGORY_REQUIRED.to_string());
    }

    errors
}

/// Whether a SKU passes the shape rules (non-blank, minimum length). The
/// catalog only runs the store-backed uniqueness check on well-formed SKUs.
pub fn sku_well_formed(sku: Option<&str>) -> bool {
    matches!(sku, Some(s) if !s.trim().is_empty() && s.chars().count() >= MIN_SKU_LEN)
}

/// Sell quantity rule, shared with the inventory ledger.
pub fn validate_quantity(quantity: i64) -> Result<(), String> {
    if quantity > 0 {
        Ok(())
    } else {
        Err(QUANTITY_NOT_POSITIVE.to_string())
    }
}

fn check_name(name: Option<&str>, errors: &mut Vec<String>) {
    match name {
        Some(name) if !name.trim().is_empty() => {}
        _ => errors.push(NAME_EMPTY.to_string()),
    }
}

fn check_sku(sku: Option<&str>, errors: &mut Vec<String>) {
    match sku {
        None => errors.push(SKU_EMPTY.to_string()),
        Some(sku) if sku.trim().is_empty() => errors.push(SKU_EMPTY.to_string()),
        Some(sku) if sku.chars().count() < MIN_SKU_LEN => {
            errors.push(SKU_TOO_SHORT.to_string());
        }
        Some(_) => {}
    }
}

fn check_price(price: Option<f64>, errors: &mut Vec<String>) {
    // Missing and non-positive are distinct checks; NaN fails the comparison
    // and is rejected with everything else that is not strictly positive.
    match price {
        Some(price) if price > 0.0 => {}
        _ => errors.push(PRICE_NOT_POSITIVE.to_string()),
    }
}

fn check_stock(stock: Option<i64>, errors: &mut Vec<String>) {
    // `Some(0)` is a valid value: a listed but unstocked product. Only a
    // genuinely absent or negative stock fails.
    match stock {
        None => errors.push(STOCK_NEGATIVE.to_string()),
        Some(stock) if stock < 0 => errors.push(STOCK_NEGATIVE.to_string()),
        Some(_) => {}
    }
}
