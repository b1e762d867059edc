use shelfline_core::{DomainError, DomainResult, ProductId};
use shelfline_infra::{DecrementOutcome, ProductStore};
use shelfline_products::{Product, validation};

/// Owns the sell semantics: guarded stock decrement, atomic under concurrent
/// sellers.
///
/// The ledger mutates only the `stock` field, and only through the store's
/// conditional-decrement primitive, so for one product id sells behave as if
/// serialized: no two sells can pass the sufficiency check against the same
/// stale stock value, and stock never goes negative.
#[derive(Debug)]
pub struct InventoryLedger<P>
where
    P: ProductStore,
{
    products: P,
}

impl<P> InventoryLedger<P>
where
    P: ProductStore,
{
    pub fn new(products: P) -> Self {
        Self { products }
    }

    /// Sell `quantity` units of a product.
    ///
    /// Fails `BadRequest` on a non-positive quantity, `NotFound` on an
    /// unknown id, and `InsufficientStock` (carrying the available count)
    /// when stock does not cover the quantity. The check-and-decrement is a
    /// single store operation; a request aborted before it leaves no
    /// partial state.
    pub async fn sell(&self, product_id: &ProductId, quantity: i64) -> DomainResult<Product> {
        validation::validate_quantity(quantity).map_err(DomainError::bad_request)?;

        match self.products.decrement_stock(product_id, quantity).await? {
            DecrementOutcome::Applied(product) => {
                tracing::info!(
                    id = %product.id,
                    quantity,
                    remaining = product.stock,
                    "product sold"
                );
                Ok(product)
            }
            DecrementOutcome::Insufficient { available } => {
                tracing::warn!(id = %product_id, quantity, available, "insufficient stock");
                Err(DomainError::insufficient_stock(available))
            }
            DecrementOutcome::Missing => Err(DomainError::NotFound),
        }
    }
}
