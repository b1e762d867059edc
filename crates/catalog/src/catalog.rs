use chrono::Utc;
use serde::Serialize;

use shelfline_core::{DomainError, DomainResult, ProductId};
use shelfline_infra::{CategoryStore, ProductStore};
use shelfline_products::{
    Category, Product, ProductDraft, ProductPatch, validation, validate_draft, validate_patch,
};

use crate::directory::CategoryDirectory;
use crate::search;

pub const SKU_EXISTS: &str = "sku already exists";
pub const CATEGORY_NOT_FOUND: &str = "category does not exist";

const NO_IDS_FOR_DELETION: &str = "no product ids provided for deletion";
const KEYWORD_EMPTY: &str = "keyword must not be empty";

/// Sentinel filter value meaning "no category filter".
const ALL_CATEGORIES: &str = "All";

/// Result of a bulk delete. Missing ids are silently ignored, so the count
/// may be lower than the number of ids requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionResult {
    pub deleted_count: u64,
}

/// Search response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub keyword: String,
    pub total_results: usize,
    pub data: Vec<Product>,
}

/// Keyed store of product records, enforcing SKU uniqueness and
/// category-existence invariants on every write path.
#[derive(Debug)]
pub struct ProductCatalog<P, C>
where
    P: ProductStore,
    C: CategoryStore,
{
    products: P,
    directory: CategoryDirectory<C>,
}

impl<P, C> ProductCatalog<P, C>
where
    P: ProductStore,
    C: CategoryStore,
{
    pub fn new(products: P, directory: CategoryDirectory<C>) -> Self {
        Self {
            products,
            directory,
        }
    }

    /// Validate and persist a new product.
    ///
    /// All applicable errors are collected into one `ValidationFailed`: the
    /// pure field rules, then the store-backed SKU uniqueness check (only
    /// when the SKU is otherwise well-formed), then category resolution.
    /// The write commits through a single store call, so an aborted request
    /// leaves no partial state.
    pub async fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        let mut errors = validate_draft(&draft);

        if validation::sku_well_formed(draft.sku.as_deref())
            && let Some(sku) = draft.sku.as_deref()
            && self.products.find_by_sku(sku).await?.is_some()
        {
            errors.push(SKU_EXISTS.to_string());
        }

        let category = self.resolve_category(draft.category.as_ref(), &mut errors).await?;

        match (draft.sku, draft.name, draft.price, draft.stock, category) {
            (Some(sku), Some(name), Some(price), Some(stock), Some(category))
                if errors.is_empty() =>
            {
                let product = Product {
                    id: ProductId::new(),
                    sku,
                    name,
                    price,
                    stock,
                    category,
                    created_at: Utc::now(),
                };
                self.products.insert(product.clone()).await?;
                tracing::info!(id = %product.id, sku = %product.sku, "product created");
                Ok(product)
            }
            _ => Err(DomainError::validation(errors)),
        }
    }

    /// All products, optionally filtered by exact embedded-category-name
    /// match. A filter containing the `"All"` sentinel means no filter.
    pub async fn list(&self, category_filter: Option<&str>) -> DomainResult<Vec<Product>> {
        let products = self.products.list().await?;
        match category_filter {
            Some(filter) if !filter.contains(ALL_CATEGORIES) => Ok(products
                .into_iter()
                .filter(|p| p.category.name == filter)
                .collect()),
            _ => Ok(products),
        }
    }

    pub async fn get(&self, id: &ProductId) -> DomainResult<Product> {
        self.products.get(id).await?.ok_or(DomainError::NotFound)
    }

    /// Apply a partial update to an existing record.
    ///
    /// Only fields present in the patch are re-validated; a patch category
    /// is re-resolved so the snapshot stays valid at this write. SKU
    /// uniqueness is not re-checked here (see DESIGN.md).
    pub async fn update(&self, id: &ProductId, patch: ProductPatch) -> DomainResult<Product> {
        let mut product = self.products.get(id).await?.ok_or(DomainError::NotFound)?;

        let mut errors = validate_patch(&patch);
        let category = self.resolve_category(patch.category.as_ref(), &mut errors).await?;
        if !errors.is_empty() {
            return Err(DomainError::validation(errors));
        }

        patch.apply_to(&mut product);
        if let Some(category) = category {
            product.category = category;
        }

        if !self.products.update(product.clone()).await? {
            // Removed between the read and the write; same answer as an
            // unknown id.
            return Err(DomainError::NotFound);
        }
        tracing::info!(id = %product.id, "product updated");
        Ok(product)
    }

    /// Remove every existing record in the id set. An empty set is a
    /// malformed request; unknown ids are a no-op, not a fault.
    pub async fn delete(&self, ids: &[ProductId]) -> DomainResult<DeletionResult> {
        if ids.is_empty() {
            return Err(DomainError::bad_request(NO_IDS_FOR_DELETION));
        }
        let deleted_count = self.products.remove_many(ids).await?;
        tracing::info!(requested = ids.len(), deleted = deleted_count, "products deleted");
        Ok(DeletionResult { deleted_count })
    }

    /// Case-insensitive substring search over name and SKU.
    pub async fn search(&self, keyword: &str) -> DomainResult<SearchResults> {
        if keyword.trim().is_empty() {
            return Err(DomainError::bad_request(KEYWORD_EMPTY));
        }
        let data = search::filter(self.products.list().await?, keyword);
        Ok(SearchResults {
            keyword: keyword.to_string(),
            total_results: data.len(),
            data,
        })
    }

    /// Resolve an optional descriptor, recording an unresolved category as a
    /// validation message rather than a hard failure. Empty or absent
    /// descriptors are already flagged by the field rules.
    async fn resolve_category(
        &self,
        descriptor: Option<&shelfline_products::CategoryDescriptor>,
        errors: &mut Vec<String>,
    ) -> DomainResult<Option<Category>> {
        let Some(descriptor) = descriptor else {
            return Ok(None);
        };
        if descriptor.is_empty() {
            return Ok(None);
        }
        match self.directory.resolve(descriptor).await {
            Ok(category) => Ok(Some(category)),
            Err(DomainError::NotFound) => {
                errors.push(CATEGORY_NOT_FOUND.to_string());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
