use crate::error::Result;
use crate::storage::{SharedStore, CATEGORIES_KEY};

use super::collection::Collection;

pub const DEFAULT_CATEGORIES: [&str; 6] = ["업무", "부업", "결혼", "개인", "살림", "가족"];

/// Board columns, in display order.
///
/// There is no add/remove operation; the list only changes by wholesale
/// replacement.
pub struct CategoryCollection {
    categories: Collection<String>,
}

impl CategoryCollection {
    pub fn load(store: SharedStore) -> Result<Self> {
        let categories = Collection::load(store, CATEGORIES_KEY, || {
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
        })?;
        Ok(Self { categories })
    }

    pub fn list(&self) -> &[String] {
        self.categories.items()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.items().iter().any(|c| c == name)
    }

    pub fn first(&self) -> Option<&str> {
        self.categories.items().first().map(String::as_str)
    }

    /// Replace the whole list. Repeated names keep their first position.
    pub fn replace(&mut self, categories: Vec<String>) -> Result<()> {
        let mut unique: Vec<String> = Vec::with_capacity(categories.len());
        for name in categories {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        self.categories.replace(unique)
    }
}
