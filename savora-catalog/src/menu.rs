use async_trait::async_trait;
use std::collections::HashMap;

use crate::item::{Category, MenuItem};

/// Read-only catalog access for ordering flows. The cart consumes item
/// snapshots through this seam and never writes back.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn item_by_id(
        &self,
        id: &str,
    ) -> Result<Option<MenuItem>, Box<dyn std::error::Error + Send + Sync>>;

    /// Items customers can currently order, for one category tab.
    async fn available_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<MenuItem>, Box<dyn std::error::Error + Send + Sync>>;

    /// Count of available items per category, for tab badges.
    async fn category_counts(
        &self,
    ) -> Result<HashMap<Category, usize>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory menu backed by a fixed item list, for tests and embedded
/// fixtures. The hosted catalog implementation lives with the backend.
pub struct StaticMenu {
    items: Vec<MenuItem>,
}

impl StaticMenu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl MenuRepository for StaticMenu {
    async fn item_by_id(
        &self,
        id: &str,
    ) -> Result<Option<MenuItem>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }

    async fn available_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<MenuItem>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.available && item.category == category)
            .cloned()
            .collect())
    }

    async fn category_counts(
        &self,
    ) -> Result<HashMap<Category, usize>, Box<dyn std::error::Error + Send + Sync>> {
        let mut counts = HashMap::new();
        for item in self.items.iter().filter(|item| item.available) {
            *counts.entry(item.category).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
