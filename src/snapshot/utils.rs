// src/snapshot/utils.rs
//! Utility functions for snapshot generation

use std::fs;
use std::path::Path;

use crate::error::{Result, TaskboardError};
use crate::storage::TASKBOARD_DIR;

/// Files a snapshot run writes. Nothing else in the directory is touched.
pub const GENERATED_FILES: [&str; 4] = ["board.md", "grid.md", "memos.md", "todos.md"];

/// Refuse to write into a directory that holds a project's `.taskboard/`.
pub fn check_snapshot_dir(snapshot_dir: &Path) -> Result<()> {
    if snapshot_dir.join(TASKBOARD_DIR).exists() {
        return Err(TaskboardError::InvalidValue(format!(
            "Snapshot directory {} contains {}; choose another directory",
            snapshot_dir.display(),
            TASKBOARD_DIR
        )));
    }
    Ok(())
}

/// Remove files left by a previous snapshot run
pub fn clear_snapshot_dir(snapshot_dir: &Path) -> Result<()> {
    for name in GENERATED_FILES {
        let path = snapshot_dir.join(name);
        if path.is_file() {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Write content to a file, creating parent directories if needed
pub fn write_snapshot_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Format a DateTime as full timestamp
pub fn format_timestamp(dt: &chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Make text safe for a single markdown table cell
pub fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}
