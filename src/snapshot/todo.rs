// src/snapshot/todo.rs
//! To-do list snapshot

use std::path::Path;

use serde::Serialize;

use crate::todo::TodoList;
use crate::Result;

use super::utils::write_snapshot_file;
use super::{current_timestamp, yaml_frontmatter, GeneratedFile};

#[derive(Serialize)]
struct TodoFrontmatter {
    view: &'static str,
    count: usize,
    remaining: usize,
}

/// Generate todos.md as a checklist
pub fn generate(todos: &TodoList, snapshot_dir: &Path) -> Result<GeneratedFile> {
    let mut content = yaml_frontmatter(&TodoFrontmatter {
        view: "todos",
        count: todos.list().len(),
        remaining: todos.remaining(),
    })?;
    content.push_str("\n# To-do\n\n");
    content.push_str("> Generated from taskboard. Do not edit directly.\n\n");

    if todos.list().is_empty() {
        content.push_str("*Nothing to do.*\n");
    } else {
        for item in todos.list() {
            let checkbox = if item.completed { "[x]" } else { "[ ]" };
            content.push_str(&format!("- {} {}\n", checkbox, item.text));
        }
        content.push_str(&format!("\n{} remaining\n", todos.remaining()));
    }

    content.push_str("\n---\n\n");
    content.push_str(&format!("*Last updated: {}*\n", current_timestamp()));

    write_snapshot_file(&snapshot_dir.join("todos.md"), &content)?;

    Ok(GeneratedFile {
        relative_path: "todos.md".to_string(),
        entity_count: todos.list().len(),
    })
}
