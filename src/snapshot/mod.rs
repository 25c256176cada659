// src/snapshot/mod.rs
//! Snapshot generation module
//!
//! Writes human-readable markdown renderings of the board, the grid, the memos
//! and the to-do list. These are derived views for browsing; nothing reads them back.

mod board;
mod grid;
mod memo;
mod todo;
pub mod utils;

use std::path::Path;

use chrono::Utc;

use crate::board::Workspace;
use crate::todo::TodoList;
use crate::Result;

pub use self::utils::{format_timestamp, GENERATED_FILES};

/// Statistics about generated snapshot
#[derive(Debug, Default)]
pub struct SnapshotStats {
    /// Tasks shown on the board (orphans excluded)
    pub board_tasks: usize,
    /// Every task, as in the grid
    pub grid_rows: usize,
    pub memos: usize,
    pub todos: usize,
    pub files_generated: Vec<String>,
}

/// Result of generating a single snapshot file
pub struct GeneratedFile {
    pub relative_path: String,
    pub entity_count: usize,
}

/// Generate markdown snapshots into `snapshot_dir`, replacing the files a
/// previous run wrote. A directory holding `.taskboard/` is refused.
pub fn generate_snapshot(
    workspace: &Workspace,
    todos: &TodoList,
    snapshot_dir: &Path,
) -> Result<SnapshotStats> {
    let mut stats = SnapshotStats::default();

    utils::check_snapshot_dir(snapshot_dir)?;
    utils::clear_snapshot_dir(snapshot_dir)?;
    std::fs::create_dir_all(snapshot_dir)?;

    let file = board::generate(workspace, snapshot_dir)?;
    stats.board_tasks = file.entity_count;
    stats.files_generated.push(file.relative_path);

    let file = grid::generate(workspace, snapshot_dir)?;
    stats.grid_rows = file.entity_count;
    stats.files_generated.push(file.relative_path);

    let file = memo::generate(workspace, snapshot_dir)?;
    stats.memos = file.entity_count;
    stats.files_generated.push(file.relative_path);

    let file = todo::generate(todos, snapshot_dir)?;
    stats.todos = file.entity_count;
    stats.files_generated.push(file.relative_path);

    Ok(stats)
}

/// Generate YAML frontmatter block
pub fn yaml_frontmatter<T: serde::Serialize>(data: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(data)?;
    Ok(format!("---\n{}---\n", yaml))
}

/// Get current timestamp for "last updated" footers
pub fn current_timestamp() -> String {
    format_timestamp(&Utc::now())
}
