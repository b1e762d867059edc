use shelfline_core::{DomainError, DomainResult};
use shelfline_infra::CategoryStore;
use shelfline_products::{Category, CategoryDescriptor};

/// Read-only lookup of valid category identifiers.
///
/// Used at product-write time to stamp an embedded snapshot into the record;
/// later changes to a category never propagate into already-written
/// products.
#[derive(Debug, Clone)]
pub struct CategoryDirectory<S>
where
    S: CategoryStore,
{
    store: S,
}

impl<S> CategoryDirectory<S>
where
    S: CategoryStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolve a descriptor to the category it names. Exact match on every
    /// supplied field; an empty descriptor resolves to nothing.
    pub async fn resolve(&self, descriptor: &CategoryDescriptor) -> DomainResult<Category> {
        if descriptor.is_empty() {
            return Err(DomainError::NotFound);
        }
        let categories = self.store.list().await?;
        categories
            .into_iter()
            .find(|c| descriptor.matches(c))
            .ok_or(DomainError::NotFound)
    }

    pub async fn exists(&self, descriptor: &CategoryDescriptor) -> DomainResult<bool> {
        match self.resolve(descriptor).await {
            Ok(_) => Ok(true),
            Err(DomainError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// All known categories.
    pub async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.store.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfline_infra::InMemoryCategoryStore;

    fn directory() -> CategoryDirectory<InMemoryCategoryStore> {
        CategoryDirectory::new(InMemoryCategoryStore::seeded(vec![
            Category {
                id: "cat-1".to_string(),
                name: "Electronics".to_string(),
            },
            Category {
                id: "cat-2".to_string(),
                name: "Groceries".to_string(),
            },
        ]))
    }

    #[tokio::test]
    async fn resolves_by_id_or_name() {
        let dir = directory();

        let by_id = dir
            .resolve(&CategoryDescriptor::by_id("cat-2"))
            .await
            .unwrap();
        assert_eq!(by_id.name, "Groceries");

        let by_name = dir
            .resolve(&CategoryDescriptor::by_name("Electronics"))
            .await
            .unwrap();
        assert_eq!(by_name.id, "cat-1");
    }

    #[tokio::test]
    async fn resolution_is_exact_match_not_substring() {
        let dir = directory();
        let err = dir
            .resolve(&CategoryDescriptor::by_name("Electro"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[tokio::test]
    async fn empty_descriptor_resolves_to_nothing() {
        let dir = directory();
        assert!(!dir.exists(&CategoryDescriptor::default()).await.unwrap());
    }

    #[tokio::test]
    async fn exists_mirrors_resolve() {
        let dir = directory();
        assert!(dir.exists(&CategoryDescriptor::by_id("cat-1")).await.unwrap());
        assert!(!dir.exists(&CategoryDescriptor::by_id("cat-9")).await.unwrap());
    }

    #[tokio::test]
    async fn list_returns_all_categories() {
        let dir = directory();
        assert_eq!(dir.list().await.unwrap().len(), 2);
    }
}
