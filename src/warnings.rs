//! Board health warnings.
//!
//! These never block an operation. The command line prints them after the
//! board view so orphaned tasks do not silently disappear.

use crate::board::Workspace;

/// Task count above which the board gets hard to scan.
pub const TASK_COUNT_WARNING_THRESHOLD: usize = 1000;

/// A warning about the state of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Tasks whose category is not a board column.
    OrphanedTasks { count: usize, categories: Vec<String> },
    /// Task count exceeds recommended threshold.
    HighTaskCount { count: usize, threshold: usize },
}

/// Check the workspace and return any warnings.
pub fn check_board(workspace: &Workspace) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let orphans = workspace.orphaned_tasks();
    if !orphans.is_empty() {
        let mut categories: Vec<String> = Vec::new();
        for task in &orphans {
            if !categories.contains(&task.category) {
                categories.push(task.category.clone());
            }
        }
        warnings.push(Warning::OrphanedTasks {
            count: orphans.len(),
            categories,
        });
    }

    let count = workspace.tasks().list().len();
    if count > TASK_COUNT_WARNING_THRESHOLD {
        warnings.push(Warning::HighTaskCount {
            count,
            threshold: TASK_COUNT_WARNING_THRESHOLD,
        });
    }

    warnings
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::OrphanedTasks { count, categories } => {
            format!(
                "Warning: {} task(s) hidden from the board; unknown categories: {}. Use 'taskboard grid' to see them.",
                count,
                categories.join(", ")
            )
        }
        Warning::HighTaskCount { count, threshold } => {
            format!(
                "Warning: {} tasks exceeds recommended {} - consider clearing closed tasks",
                count, threshold
            )
        }
    }
}
