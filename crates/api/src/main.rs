use anyhow::Result;

use shelfline_api::dto::{CreateProductRequest, SellProductRequest};
use shelfline_api::AppServices;
use shelfline_products::{Category, CategoryDescriptor};

/// Dev smoke entrypoint: wires the in-memory stores and runs one
/// create/sell round trip. The real transport layer lives elsewhere.
#[tokio::main]
async fn main() -> Result<()> {
    shelfline_observability::init();

    let services = AppServices::in_memory(vec![
        Category {
            id: "cat-1".to_string(),
            name: "Electronics".to_string(),
        },
        Category {
            id: "cat-2".to_string(),
            name: "Groceries".to_string(),
        },
    ]);

    let created = services
        .create_product(CreateProductRequest {
            sku: Some("SKU-001".to_string()),
            name: Some("Wireless Mouse".to_string()),
            price: Some(19.99),
            stock: Some(10),
            category: Some(CategoryDescriptor::by_name("Electronics")),
        })
        .await?;
    tracing::info!(id = %created.data.id, "created");

    let sold = services
        .sell_product(SellProductRequest {
            product_id: created.data.id.to_string(),
            quantity: 3,
        })
        .await?;
    tracing::info!(remaining = sold.data.stock, "sold");

    println!("{}", serde_json::to_string_pretty(&sold)?);
    Ok(())
}
