// src/snapshot/board.rs
//! Kanban board snapshot

use std::path::Path;

use serde::Serialize;

use crate::board::Workspace;
use crate::entity::Task;
use crate::view::BoardColumn;
use crate::Result;

use super::utils::write_snapshot_file;
use super::{current_timestamp, yaml_frontmatter, GeneratedFile};

#[derive(Serialize)]
struct BoardFrontmatter {
    view: &'static str,
    theme: String,
    columns: usize,
    tasks: usize,
}

/// Format a single task card. Closed tasks are struck through.
fn format_card(task: &Task) -> String {
    let title = if task.status.is_closed() {
        format!("~~{}~~", task.title)
    } else {
        format!("**{}**", task.title)
    };

    let mut line = format!("- {} `{}` `{}`", title, task.status, task.importance);
    if !task.d_day.is_empty() {
        line.push_str(&format!(" `{}`", task.d_day));
    }
    line.push_str(&format!(" `#{}`", task.id));
    line
}

fn format_column(column: &BoardColumn<'_>) -> String {
    let mut content = format!("## {} ({})\n\n", column.category, column.tasks.len());
    if column.tasks.is_empty() {
        content.push_str("*No tasks.*\n");
    } else {
        for task in &column.tasks {
            content.push_str(&format_card(task));
            content.push('\n');
        }
    }
    content.push('\n');
    content
}

/// Generate board.md with one section per category
pub fn generate(workspace: &Workspace, snapshot_dir: &Path) -> Result<GeneratedFile> {
    let columns = workspace.board();
    let shown: usize = columns.iter().map(|c| c.tasks.len()).sum();

    let mut content = yaml_frontmatter(&BoardFrontmatter {
        view: "kanban",
        theme: workspace.theme().to_string(),
        columns: columns.len(),
        tasks: shown,
    })?;
    content.push_str("\n# Board\n\n");
    content.push_str("> Generated from taskboard. Do not edit directly.\n\n");

    for column in &columns {
        content.push_str(&format_column(column));
    }

    content.push_str("---\n\n");
    content.push_str(&format!("*Last updated: {}*\n", current_timestamp()));

    write_snapshot_file(&snapshot_dir.join("board.md"), &content)?;

    Ok(GeneratedFile {
        relative_path: "board.md".to_string(),
        entity_count: shown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Importance, TaskStatus};

    fn mock_task(title: &str, status: TaskStatus) -> Task {
        let mut task = Task::new(1700000000000, "업무");
        task.title = title.to_string();
        task.status = status;
        task
    }

    #[test]
    fn test_format_open_card() {
        let mut task = mock_task("보고서 작성", TaskStatus::InProgress);
        task.importance = Importance::Urgent;
        task.d_day = "D-2".to_string();
        let line = format_card(&task);

        assert!(line.contains("**보고서 작성**"));
        assert!(line.contains("`진행중`"));
        assert!(line.contains("`긴급`"));
        assert!(line.contains("`D-2`"));
        assert!(line.contains("#1700000000000"));
    }

    #[test]
    fn test_format_closed_cards_are_struck() {
        for status in [TaskStatus::Done, TaskStatus::ClosedUnresolved] {
            let line = format_card(&mock_task("끝난 일", status));
            assert!(line.contains("~~끝난 일~~"));
        }
    }

    #[test]
    fn test_format_empty_column() {
        let column = BoardColumn {
            category: "가족",
            tasks: vec![],
        };
        let text = format_column(&column);
        assert!(text.starts_with("## 가족 (0)"));
        assert!(text.contains("*No tasks.*"));
    }
}
