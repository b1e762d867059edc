//! Property test: random create/update/sell/delete sequences, checked
//! against a sequential model after every step. Catches any write path that
//! could break SKU uniqueness, category validity, or the stock rules.

use std::collections::HashMap;

use proptest::prelude::*;

use shelfline_api::dto::{
    CreateProductRequest, DeleteProductsRequest, SellProductRequest, UpdateProductRequest,
};
use shelfline_api::AppServices;
use shelfline_core::{DomainError, ProductId};
use shelfline_products::{Category, CategoryDescriptor};

const SKUS: [&str; 4] = ["SKU-100", "SKU-200", "SKU-300", "SKU-400"];
const CATEGORIES: [&str; 3] = ["Electronics", "Groceries", "Toys"]; // Toys is never seeded

#[derive(Debug, Clone)]
enum Op {
    Create {
        sku: usize,
        price: f64,
        stock: i64,
        category: usize,
    },
    Update {
        sku: usize,
        stock: Option<i64>,
        price: Option<f64>,
    },
    Sell {
        sku: usize,
        quantity: i64,
    },
    Delete {
        sku: usize,
    },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..SKUS.len(), -5.0f64..50.0, -3i64..12, 0..CATEGORIES.len()).prop_map(
            |(sku, price, stock, category)| Op::Create {
                sku,
                price,
                stock,
                category,
            }
        ),
        (
            0..SKUS.len(),
            proptest::option::of(-3i64..12),
            proptest::option::of(-5.0f64..50.0)
        )
            .prop_map(|(sku, stock, price)| Op::Update { sku, stock, price }),
        (0..SKUS.len(), -2i64..8).prop_map(|(sku, quantity)| Op::Sell { sku, quantity }),
        (0..SKUS.len()).prop_map(|sku| Op::Delete { sku }),
    ]
}

/// Sequential model: sku -> (id, expected stock).
type Model = HashMap<&'static str, (String, i64)>;

fn seeded_services() -> AppServices {
    AppServices::in_memory(vec![
        Category {
            id: "cat-1".to_string(),
            name: "Electronics".to_string(),
        },
        Category {
            id: "cat-2".to_string(),
            name: "Groceries".to_string(),
        },
    ])
}

async fn apply(services: &AppServices, model: &mut Model, op: Op) {
    match op {
        Op::Create {
            sku,
            price,
            stock,
            category,
        } => {
            let sku = SKUS[sku];
            let result = services
                .create_product(CreateProductRequest {
                    sku: Some(sku.to_string()),
                    name: Some(format!("Product {sku}")),
                    price: Some(price),
                    stock: Some(stock),
                    category: Some(CategoryDescriptor::by_name(CATEGORIES[category])),
                })
                .await;
            match result {
                Ok(response) => {
                    assert!(!model.contains_key(sku), "duplicate sku accepted");
                    assert!(price > 0.0 && stock >= 0 && category < 2);
                    model.insert(sku, (response.data.id.to_string(), stock));
                }
                Err(DomainError::ValidationFailed(_)) => {}
                Err(other) => panic!("unexpected create error: {other:?}"),
            }
        }
        Op::Update { sku, stock, price } => {
            let sku = SKUS[sku];
            let Some((id, _)) = model.get(sku).cloned() else {
                return;
            };
            let result = services
                .update_product(
                    &id,
                    UpdateProductRequest {
                        stock,
                        price,
                        ..Default::default()
                    },
                )
                .await;
            match result {
                Ok(updated) => {
                    if let Some(stock) = stock {
                        assert_eq!(updated.stock, stock);
                        model.insert(sku, (id, stock));
                    }
                }
                Err(DomainError::ValidationFailed(_)) => {
                    assert!(stock.is_some_and(|s| s < 0) || price.is_some_and(|p| p <= 0.0));
                }
                Err(other) => panic!("unexpected update error: {other:?}"),
            }
        }
        Op::Sell { sku, quantity } => {
            let sku = SKUS[sku];
            let (id, expected) = match model.get(sku) {
                Some((id, expected)) => (id.clone(), *expected),
                None => (ProductId::new().to_string(), 0),
            };
            let result = services
                .sell_product(SellProductRequest {
                    product_id: id.clone(),
                    quantity,
                })
                .await;
            match result {
                Ok(sold) => {
                    assert!(quantity > 0);
                    assert!(sold.data.stock >= 0);
                    assert_eq!(sold.data.stock, expected - quantity);
                    model.insert(sku, (id, sold.data.stock));
                }
                Err(DomainError::BadRequest(_)) => assert!(quantity <= 0),
                Err(DomainError::NotFound) => assert!(!model.contains_key(sku)),
                Err(DomainError::InsufficientStock { available }) => {
                    assert_eq!(available, expected);
                    assert!(quantity > available);
                }
                Err(other) => panic!("unexpected sell error: {other:?}"),
            }
        }
        Op::Delete { sku } => {
            let sku = SKUS[sku];
            let Some((id, _)) = model.get(sku).cloned() else {
                return;
            };
            let result = services
                .delete_products(DeleteProductsRequest {
                    product_ids: vec![id],
                })
                .await
                .unwrap();
            assert_eq!(result.deleted_count, 1);
            model.remove(sku);
        }
    }
}

async fn assert_invariants(services: &AppServices, model: &Model) {
    let products = services.list_products(None).await.unwrap();
    assert_eq!(products.len(), model.len());

    let mut seen = std::collections::HashSet::new();
    for product in &products {
        // I1: sku uniqueness.
        assert!(seen.insert(product.sku.clone()), "duplicate sku persisted");
        // I2 / I4: price positive, stock never negative.
        assert!(product.price > 0.0);
        assert!(product.stock >= 0);
        // I3: the snapshot names a seeded category.
        assert!(["Electronics", "Groceries"].contains(&product.category.name.as_str()));
        // Stock agrees with the sequential model.
        let (_, expected) = &model[product.sku.as_str()];
        assert_eq!(product.stock, *expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_operation_sequences_preserve_invariants(
        ops in proptest::collection::vec(op_strategy(), 1..40)
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        rt.block_on(async {
            let services = seeded_services();
            let mut model = Model::new();
            for op in ops {
                apply(&services, &mut model, op).await;
                assert_invariants(&services, &model).await;
            }
        });
    }
}
