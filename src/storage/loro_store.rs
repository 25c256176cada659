use std::fs;
use std::path::{Path, PathBuf};

use loro::{LoroDoc, LoroValue, ValueOrContainer};

use super::KeyValueStore;
use crate::error::{Result, TaskboardError};

const KV_MAP: &str = "kv";

/// Key-value pairs held in a Loro document, snapshotted to one file on every write.
pub struct LoroStore {
    doc: LoroDoc,
    path: PathBuf,
}

impl LoroStore {
    /// Create a new, empty document file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(TaskboardError::AlreadyInitialized);
        }

        let store = Self {
            doc: LoroDoc::new(),
            path: path.to_path_buf(),
        };
        store.save()?;
        Ok(store)
    }

    /// Load an existing document file
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TaskboardError::NotInitialized);
        }

        let bytes = fs::read(path)?;
        let doc = LoroDoc::new();
        doc.import(&bytes)?;

        Ok(Self {
            doc,
            path: path.to_path_buf(),
        })
    }

    /// Write the full document snapshot to disk
    pub fn save(&self) -> Result<()> {
        let bytes = self.doc.export(loro::ExportMode::Snapshot)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KeyValueStore for LoroStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let kv = self.doc.get_map(KV_MAP);
        match kv.get(key) {
            Some(ValueOrContainer::Value(LoroValue::String(s))) => Ok(Some(s.to_string())),
            _ => Ok(None),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        let kv = self.doc.get_map(KV_MAP);
        kv.insert(key, value.to_string())?;
        self.doc.commit();
        self.save()?;
        tracing::debug!(key, bytes = value.len(), path = %self.path.display(), "wrote loro entry");
        Ok(())
    }
}
