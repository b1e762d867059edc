use serde::{Deserialize, Serialize};

/// A product category.
///
/// `id` is an externally assigned identifier, not the storage key. Categories
/// are created out of band and treated as immutable once a product snapshots
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Caller-supplied reference to a category: whatever subset of fields the
/// caller knows. Resolution is exact-match on every supplied field, never
/// substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CategoryDescriptor {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// A descriptor with no fields matches nothing.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Exact match on every field the caller supplied.
    pub fn matches(&self, category: &Category) -> bool {
        if self.is_empty() {
            return false;
        }
        if let Some(id) = &self.id
            && *id != category.id
        {
            return false;
        }
        if let Some(name) = &self.name
            && *name != category.name
        {
            return false;
        }
        true
    }
}

impl From<&Category> for CategoryDescriptor {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: Some(category.name.clone()),
        }
    }
}
