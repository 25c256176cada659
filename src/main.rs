use clap::Parser;
use taskboard::cli::{
    handle_board, handle_categories, handle_grid, handle_init, handle_memo_add,
    handle_memo_content, handle_memo_delete, handle_memo_list, handle_memo_title,
    handle_memo_toggle, handle_show, handle_snapshot, handle_task_delete, handle_task_edit,
    handle_task_get, handle_task_new, handle_theme, handle_todo_add, handle_todo_clear,
    handle_todo_delete, handle_todo_list, handle_todo_toggle, Cli, Commands, MemoAction,
    TaskAction, ThemeAction, TodoAction,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { backend } => handle_init(backend),
        Commands::Board { json } => handle_board(json),
        Commands::Grid { json } => handle_grid(json),
        Commands::Show { view } => handle_show(view),
        Commands::Task(task_cmd) => match task_cmd.action {
            TaskAction::New {
                category,
                title,
                importance,
                status,
                content,
                dday,
                stdin,
                json,
            } => handle_task_new(category, title, importance, status, content, dday, stdin, json),
            TaskAction::Edit {
                id,
                title,
                category,
                importance,
                status,
                content,
                dday,
                json,
            } => handle_task_edit(id, title, category, importance, status, content, dday, json),
            TaskAction::Get { id, json } => handle_task_get(id, json),
            TaskAction::Delete { id, force } => handle_task_delete(id, force),
        },
        Commands::Memo(memo_cmd) => match memo_cmd.action {
            MemoAction::List { json } => handle_memo_list(json),
            MemoAction::Add {
                title,
                content,
                json,
            } => handle_memo_add(title, content, json),
            MemoAction::Title { id, title } => handle_memo_title(id, title),
            MemoAction::Content { id, content, stdin } => handle_memo_content(id, content, stdin),
            MemoAction::Toggle { id } => handle_memo_toggle(id),
            MemoAction::Delete { id } => handle_memo_delete(id),
        },
        Commands::Categories { json } => handle_categories(json),
        Commands::Theme { action } => handle_theme(matches!(action, Some(ThemeAction::Toggle))),
        Commands::Todo(todo_cmd) => match todo_cmd.action {
            TodoAction::List { json } => handle_todo_list(json),
            TodoAction::Add { text } => handle_todo_add(text),
            TodoAction::Toggle { id } => handle_todo_toggle(id),
            TodoAction::Delete { id } => handle_todo_delete(id),
            TodoAction::Clear => handle_todo_clear(),
        },
        Commands::Snapshot { dir } => handle_snapshot(dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
