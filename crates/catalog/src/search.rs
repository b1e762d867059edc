//! Case-insensitive substring search over product name and SKU.
//!
//! A derived view over catalog records; no independent state.

use shelfline_products::Product;

/// Whether a product matches a keyword on its name or SKU.
pub fn matches(product: &Product, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    product.name.to_lowercase().contains(&keyword)
        || product.sku.to_lowercase().contains(&keyword)
}

/// Filter a record set down to keyword matches, preserving order.
pub fn filter(products: Vec<Product>, keyword: &str) -> Vec<Product> {
    products.into_iter().filter(|p| matches(p, keyword)).collect()
}
