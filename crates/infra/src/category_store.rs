use std::sync::Arc;

use tokio::sync::RwLock;

use shelfline_products::Category;

use crate::StoreError;

/// Read-only category collection. Categories are created out of band; the
/// runtime surface only ever lists them.
pub trait CategoryStore: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Category>, StoreError>> + Send;
}

impl<S> CategoryStore for Arc<S>
where
    S: CategoryStore + ?Sized,
{
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        (**self).list().await
    }
}

/// In-memory category store, seeded at construction.
#[derive(Debug, Default)]
pub struct InMemoryCategoryStore {
    inner: RwLock<Vec<Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded(categories: Vec<Category>) -> Self {
        Self {
            inner: RwLock::new(categories),
        }
    }

    /// Out-of-band category creation (tests, process bootstrap).
    pub async fn add(&self, category: Category) {
        self.inner.write().await.push(category);
    }
}

impl CategoryStore for InMemoryCategoryStore {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.inner.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_lists_in_seed_order() {
        let store = InMemoryCategoryStore::seeded(vec![
            Category {
                id: "cat-1".to_string(),
                name: "Electronics".to_string(),
            },
            Category {
                id: "cat-2".to_string(),
                name: "Groceries".to_string(),
            },
        ]);

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Electronics", "Groceries"]);
    }

    #[tokio::test]
    async fn add_appends_out_of_band() {
        let store = InMemoryCategoryStore::new();
        store
            .add(Category {
                id: "cat-1".to_string(),
                name: "Electronics".to_string(),
            })
            .await;
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
