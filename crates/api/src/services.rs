//! Service wiring: concrete stores injected into catalog, directory, and
//! ledger at construction. Explicit handles, no global connection state.

use std::sync::Arc;

use shelfline_catalog::{
    CategoryDirectory, DeletionResult, InventoryLedger, ProductCatalog, SearchResults,
};
use shelfline_core::{DomainResult, ProductId};
use shelfline_infra::{InMemoryCategoryStore, InMemoryProductStore};
use shelfline_products::{Category, Product};

use crate::dto::{
    CreateProductRequest, CreateProductResponse, DeleteProductsRequest, SellProductRequest,
    SellProductResponse, UpdateProductRequest,
};

type ProductStoreHandle = Arc<InMemoryProductStore>;
type CategoryStoreHandle = Arc<InMemoryCategoryStore>;

/// All components over shared in-memory stores. The catalog and the ledger
/// hold handles to the same product store, so every stock mutation goes
/// through the one decrement primitive.
pub struct AppServices {
    catalog: ProductCatalog<ProductStoreHandle, CategoryStoreHandle>,
    ledger: InventoryLedger<ProductStoreHandle>,
    directory: CategoryDirectory<CategoryStoreHandle>,
}

impl AppServices {
    /// In-memory wiring, with categories seeded out of band.
    pub fn in_memory(categories: Vec<Category>) -> Self {
        let products: ProductStoreHandle = Arc::new(InMemoryProductStore::new());
        let category_store: CategoryStoreHandle =
            Arc::new(InMemoryCategoryStore::seeded(categories));
        let directory = CategoryDirectory::new(category_store);

        Self {
            catalog: ProductCatalog::new(products.clone(), directory.clone()),
            ledger: InventoryLedger::new(products),
            directory,
        }
    }

    pub async fn create_product(
        &self,
        req: CreateProductRequest,
    ) -> DomainResult<CreateProductResponse> {
        let product = self.catalog.create(req.into()).await?;
        Ok(CreateProductResponse::new(product))
    }

    pub async fn list_products(
        &self,
        category_filter: Option<&str>,
    ) -> DomainResult<Vec<Product>> {
        self.catalog.list(category_filter).await
    }

    pub async fn search_products(&self, keyword: &str) -> DomainResult<SearchResults> {
        self.catalog.search(keyword).await
    }

    pub async fn update_product(
        &self,
        id: &str,
        req: UpdateProductRequest,
    ) -> DomainResult<Product> {
        let id: ProductId = id.parse()?;
        self.catalog.update(&id, req.into()).await
    }

    pub async fn delete_products(
        &self,
        req: DeleteProductsRequest,
    ) -> DomainResult<DeletionResult> {
        let ids = req
            .product_ids
            .iter()
            .map(|raw| raw.parse::<ProductId>())
            .collect::<DomainResult<Vec<_>>>()?;
        self.catalog.delete(&ids).await
    }

    pub async fn sell_product(&self, req: SellProductRequest) -> DomainResult<SellProductResponse> {
        let id: ProductId = req.product_id.parse()?;
        let product = self.ledger.sell(&id, req.quantity).await?;
        Ok(SellProductResponse::new(product))
    }

    pub async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        self.directory.list().await
    }
}
