use serde::Serialize;

use crate::entity::Task;

/// One column of the kanban board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn<'a> {
    pub category: &'a str,
    pub tasks: Vec<&'a Task>,
}

/// Group `tasks` into one column per category, in category order.
///
/// Within a column tasks keep their collection order. Tasks whose category is
/// not in `categories` appear in no column.
pub fn board_projection<'a>(categories: &'a [String], tasks: &'a [Task]) -> Vec<BoardColumn<'a>> {
    categories
        .iter()
        .map(|category| BoardColumn {
            category,
            tasks: tasks.iter().filter(|t| &t.category == category).collect(),
        })
        .collect()
}

/// Tasks that no board column shows.
pub fn orphaned_tasks<'a>(categories: &[String], tasks: &'a [Task]) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| !categories.contains(&t.category))
        .collect()
}
