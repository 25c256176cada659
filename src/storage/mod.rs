//! Durable key-value storage.
//!
//! Every collection is stored as one JSON document under a fixed key. Backends
//! only move strings; JSON encoding lives in [`KeyValueStoreExt`].

mod loro_store;
mod memory;
mod sqlite_store;

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Backend, Config};
use crate::error::{Result, TaskboardError};

pub use loro_store::LoroStore;
pub use memory::MemoryStore;
pub use sqlite_store::SqliteStore;

pub const TASKBOARD_DIR: &str = ".taskboard";

pub const TASKS_KEY: &str = "kanban_tasks";
pub const MEMOS_KEY: &str = "kanban_memos";
pub const CATEGORIES_KEY: &str = "kanban_categories";
pub const THEME_KEY: &str = "theme";
pub const TODOS_KEY: &str = "todos";

/// A synchronous string store. `set_raw` must be durable when it returns.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;
}

/// JSON access on top of any [`KeyValueStore`].
pub trait KeyValueStoreExt {
    /// Read and decode the value under `key`. Content that does not decode
    /// yields [`TaskboardError::Parse`].
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| TaskboardError::Parse {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}

/// Shared handle used by every collection in a workspace.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// Create `.taskboard/` under `root` with a config file and an empty backend.
pub fn init_project(root: &Path, backend: Backend) -> Result<SharedStore> {
    let dir = root.join(TASKBOARD_DIR);
    if dir.exists() {
        return Err(TaskboardError::AlreadyInitialized);
    }
    fs::create_dir_all(&dir)?;

    let config = Config {
        backend,
        ..Config::default()
    };
    config.save(&dir)?;

    let path = dir.join(backend.file_name());
    let store: SharedStore = match backend {
        Backend::Loro => Rc::new(LoroStore::create(&path)?),
        Backend::Sqlite => Rc::new(SqliteStore::open(&path)?),
    };
    tracing::debug!(path = %path.display(), ?backend, "initialized taskboard");
    Ok(store)
}

/// Open the store of an existing project rooted at `root`.
pub fn open_project(root: &Path) -> Result<(Config, SharedStore)> {
    let dir = root.join(TASKBOARD_DIR);
    if !dir.is_dir() {
        return Err(TaskboardError::NotInitialized);
    }

    let config = Config::load(&dir)?;
    let path = dir.join(config.backend.file_name());
    if !path.exists() {
        return Err(TaskboardError::NotInitialized);
    }

    let store: SharedStore = match config.backend {
        Backend::Loro => Rc::new(LoroStore::open(&path)?),
        Backend::Sqlite => Rc::new(SqliteStore::open(&path)?),
    };
    Ok((config, store))
}

/// Walk up from `start` looking for `.taskboard/`, stopping at a git root.
pub fn find_project_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(TASKBOARD_DIR).exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}
