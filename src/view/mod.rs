//! Derived views over the task list. Nothing here is persisted.

mod board;
mod grid;

pub use board::{board_projection, orphaned_tasks, BoardColumn};
pub use grid::{
    grid_projection, CollaboratorError, ColumnKind, GridBinding, GridCollaborator, GridColumn,
    GridRow, TextGrid, GRID_COLUMNS, IMPORTANCE_LABELS, STATUS_LABELS,
};
