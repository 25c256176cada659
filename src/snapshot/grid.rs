// src/snapshot/grid.rs
//! Grid snapshot: every task as one markdown table row

use std::path::Path;

use serde::Serialize;

use crate::board::Workspace;
use crate::view::{GridRow, GRID_COLUMNS};
use crate::Result;

use super::utils::{table_cell, write_snapshot_file};
use super::{current_timestamp, yaml_frontmatter, GeneratedFile};

#[derive(Serialize)]
struct GridFrontmatter {
    view: &'static str,
    rows: usize,
}

fn format_table(rows: &[GridRow]) -> String {
    let headers: Vec<&str> = GRID_COLUMNS.iter().map(|c| c.header).collect();
    let mut table = format!("| {} |\n", headers.join(" | "));
    table.push_str(&format!("|{}\n", "---|".repeat(GRID_COLUMNS.len())));

    for row in rows {
        let cells: Vec<String> = GRID_COLUMNS
            .iter()
            .map(|c| table_cell(row.cell(c.name).unwrap_or_default()))
            .collect();
        table.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    table
}

/// Generate grid.md
pub fn generate(workspace: &Workspace, snapshot_dir: &Path) -> Result<GeneratedFile> {
    let rows = workspace.grid();

    let mut content = yaml_frontmatter(&GridFrontmatter {
        view: "grid",
        rows: rows.len(),
    })?;
    content.push_str("\n# Grid\n\n");
    content.push_str("> Generated from taskboard. Do not edit directly.\n\n");

    if rows.is_empty() {
        content.push_str("*No tasks.*\n\n");
    } else {
        content.push_str(&format_table(&rows));
        content.push('\n');
    }

    content.push_str("---\n\n");
    content.push_str(&format!("*Last updated: {}*\n", current_timestamp()));

    write_snapshot_file(&snapshot_dir.join("grid.md"), &content)?;

    Ok(GeneratedFile {
        relative_path: "grid.md".to_string(),
        entity_count: rows.len(),
    })
}
