use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::storage::{KeyValueStoreExt, SharedStore};

/// An ordered list mirrored in full to one store key.
///
/// Every mutation goes through [`Collection::replace`], which swaps the whole
/// list and rewrites the whole document.
pub struct Collection<T> {
    key: &'static str,
    items: Vec<T>,
    store: SharedStore,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load `key`, falling back to `seed` when the value is absent or does not
    /// decode. The seed is written back so the store matches memory.
    pub fn load<F>(store: SharedStore, key: &'static str, seed: F) -> Result<Self>
    where
        F: FnOnce() -> Vec<T>,
    {
        let loaded = match store.get_json::<Vec<T>>(key) {
            Ok(Some(items)) => Some(items),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable stored value");
                None
            }
        };

        match loaded {
            Some(items) => Ok(Self { key, items, store }),
            None => {
                let collection = Self {
                    key,
                    items: seed(),
                    store,
                };
                collection.persist()?;
                Ok(collection)
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Swap in a new list and persist it.
    pub fn replace(&mut self, items: Vec<T>) -> Result<()> {
        self.items = items;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.set_json(self.key, &self.items)?;
        tracing::debug!(key = self.key, len = self.items.len(), "persisted collection");
        Ok(())
    }
}
