pub mod board;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod snapshot;
pub mod storage;
pub mod todo;
pub mod view;
pub mod warnings;

pub use board::Workspace;
pub use error::{Result, TaskboardError};
pub use storage::{KeyValueStore, KeyValueStoreExt, MemoryStore};
