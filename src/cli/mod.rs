mod commands;
mod handlers;

pub use commands::{
    Cli, Commands, MemoAction, MemoCommand, TaskAction, TaskCommand, ThemeAction, TodoAction,
    TodoCommand,
};
pub use handlers::{
    handle_board, handle_categories, handle_grid, handle_init, handle_memo_add,
    handle_memo_content, handle_memo_delete, handle_memo_list, handle_memo_title,
    handle_memo_toggle, handle_show, handle_snapshot, handle_task_delete, handle_task_edit,
    handle_task_get, handle_task_new, handle_theme, handle_todo_add, handle_todo_clear,
    handle_todo_delete, handle_todo_list, handle_todo_toggle,
};
