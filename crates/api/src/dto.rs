//! Request/response DTOs: one explicit schema per boundary shape, validated
//! before anything reaches the core components.

use serde::{Deserialize, Serialize};

use shelfline_products::{CategoryDescriptor, Product, ProductDraft, ProductPatch};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProductRequest {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<CategoryDescriptor>,
}

impl From<CreateProductRequest> for ProductDraft {
    fn from(req: CreateProductRequest) -> Self {
        ProductDraft {
            sku: req.sku,
            name: req.name,
            price: req.price,
            stock: req.stock,
            category: req.category,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<CategoryDescriptor>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        ProductPatch {
            sku: req.sku,
            name: req.name,
            price: req.price,
            stock: req.stock,
            category: req.category,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductsRequest {
    pub product_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellProductRequest {
    pub product_id: String,
    pub quantity: i64,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CreateProductResponse {
    pub message: &'static str,
    pub data: Product,
}

impl CreateProductResponse {
    pub fn new(data: Product) -> Self {
        Self {
            message: "Product created successfully",
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SellProductResponse {
    pub message: &'static str,
    pub data: Product,
}

impl SellProductResponse {
    pub fn new(data: Product) -> Self {
        Self {
            message: "Sell product successfully",
            data,
        }
    }
}
