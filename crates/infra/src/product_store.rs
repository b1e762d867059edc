use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use shelfline_core::ProductId;
use shelfline_products::Product;

use crate::StoreError;

/// Outcome of a conditional stock decrement.
#[derive(Debug, Clone, PartialEq)]
pub enum DecrementOutcome {
    /// Stock was sufficient; the decrement was applied. Carries the updated
    /// record.
    Applied(Product),
    /// Stock was below the requested quantity; nothing changed.
    Insufficient { available: i64 },
    /// No record with that id.
    Missing,
}

/// Keyed product record store.
///
/// `decrement_stock` is the one mutation the inventory ledger is allowed to
/// perform: check-and-decrement as a single indivisible operation against
/// the store, so concurrent sells on one product cannot both pass a stale
/// sufficiency check.
pub trait ProductStore: Send + Sync {
    fn get(
        &self,
        id: &ProductId,
    ) -> impl Future<Output = Result<Option<Product>, StoreError>> + Send;

    fn insert(&self, product: Product)
    -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Replace an existing record. Returns `false` when the id is unknown.
    fn update(&self, product: Product)
    -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Remove every listed id that exists; unknown ids are ignored. Returns
    /// the number of records actually removed.
    fn remove_many(
        &self,
        ids: &[ProductId],
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<Product>, StoreError>> + Send;

    fn find_by_sku(
        &self,
        sku: &str,
    ) -> impl Future<Output = Result<Option<Product>, StoreError>> + Send;

    /// Decrement `stock` by `quantity` only if current stock covers it, as
    /// one atomic operation.
    fn decrement_stock(
        &self,
        id: &ProductId,
        quantity: i64,
    ) -> impl Future<Output = Result<DecrementOutcome, StoreError>> + Send;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        (**self).get(id).await
    }

    async fn insert(&self, product: Product) -> Result<(), StoreError> {
        (**self).insert(product).await
    }

    async fn update(&self, product: Product) -> Result<bool, StoreError> {
        (**self).update(product).await
    }

    async fn remove_many(&self, ids: &[ProductId]) -> Result<u64, StoreError> {
        (**self).remove_many(ids).await
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        (**self).list().await
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, StoreError> {
        (**self).find_by_sku(sku).await
    }

    async fn decrement_stock(
        &self,
        id: &ProductId,
        quantity: i64,
    ) -> Result<DecrementOutcome, StoreError> {
        (**self).decrement_stock(id, quantity).await
    }
}

/// In-memory product store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl ProductStore for InMemoryProductStore {
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.inner.read().await.get(id).cloned())
    }

    async fn insert(&self, product: Product) -> Result<(), StoreError> {
        self.inner.write().await.insert(product.id, product);
        Ok(())
    }

    async fn update(&self, product: Product) -> Result<bool, StoreError> {
        let mut map = self.inner.write().await;
        match map.get_mut(&product.id) {
            Some(slot) => {
                *slot = product;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_many(&self, ids: &[ProductId]) -> Result<u64, StoreError> {
        let mut map = self.inner.write().await;
        let mut removed = 0u64;
        for id in ids {
            if map.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let map = self.inner.read().await;
        let mut products: Vec<Product> = map.values().cloned().collect();
        // UUIDv7 ids are time-ordered, so this is creation order.
        products.sort_by_key(|p| *p.id.as_uuid());
        Ok(products)
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, StoreError> {
        let map = self.inner.read().await;
        Ok(map.values().find(|p| p.sku == sku).cloned())
    }

    async fn decrement_stock(
        &self,
        id: &ProductId,
        quantity: i64,
    ) -> Result<DecrementOutcome, StoreError> {
        // Sufficiency check and decrement inside one write-lock critical
        // section: sells on the same product serialize here.
        let mut map = self.inner.write().await;
        let Some(product) = map.get_mut(id) else {
            return Ok(DecrementOutcome::Missing);
        };
        if product.stock < quantity {
            return Ok(DecrementOutcome::Insufficient {
                available: product.stock,
            });
        }
        product.stock -= quantity;
        Ok(DecrementOutcome::Applied(product.clone()))
    }
}
