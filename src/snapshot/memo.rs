// src/snapshot/memo.rs
//! Memo snapshot

use std::path::Path;

use serde::Serialize;

use crate::board::Workspace;
use crate::entity::Memo;
use crate::Result;

use super::utils::write_snapshot_file;
use super::{current_timestamp, yaml_frontmatter, GeneratedFile};

#[derive(Serialize)]
struct MemoFrontmatter {
    view: &'static str,
    count: usize,
    expanded: usize,
}

fn format_memo(memo: &Memo) -> String {
    let mut text = format!("## {}\n\n", memo.title);
    if memo.content.is_empty() {
        text.push_str("*Empty.*\n\n");
    } else {
        text.push_str(&memo.content);
        text.push_str("\n\n");
    }
    text
}

/// Generate memos.md
pub fn generate(workspace: &Workspace, snapshot_dir: &Path) -> Result<GeneratedFile> {
    let memos = workspace.memos().list();

    let mut content = yaml_frontmatter(&MemoFrontmatter {
        view: "memos",
        count: memos.len(),
        expanded: memos.iter().filter(|m| m.expanded).count(),
    })?;
    content.push_str("\n# Memos\n\n");
    content.push_str("> Generated from taskboard. Do not edit directly.\n\n");

    if memos.is_empty() {
        content.push_str("*No memos.*\n\n");
    }
    for memo in memos {
        content.push_str(&format_memo(memo));
    }

    content.push_str("---\n\n");
    content.push_str(&format!("*Last updated: {}*\n", current_timestamp()));

    write_snapshot_file(&snapshot_dir.join("memos.md"), &content)?;

    Ok(GeneratedFile {
        relative_path: "memos.md".to_string(),
        entity_count: memos.len(),
    })
}
