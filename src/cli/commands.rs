use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version, about = "A local kanban task board with memos and a to-do list")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new taskboard in the current directory
    Init {
        /// Storage backend (loro, sqlite)
        #[arg(long, default_value = "loro")]
        backend: String,
    },

    /// Show tasks grouped by category
    Board {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every task as a table
    Grid {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the board in the given view mode (kanban, grid)
    Show {
        #[arg(long, default_value = "kanban")]
        view: String,
    },

    /// Manage tasks
    Task(TaskCommand),

    /// Manage sidebar memos
    Memo(MemoCommand),

    /// List board categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or toggle the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Manage the to-do list
    Todo(TodoCommand),

    /// Write markdown snapshots of the board, grid, memos and to-dos
    Snapshot {
        /// Output directory (defaults to the configured snapshot_dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Create a task
    New {
        /// Category (defaults to the first board column)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Task title
        #[arg(long, short = 't', default_value = "")]
        title: String,

        /// Importance (루틴, 긴급, 높음, 보통, 낮음, 보류)
        #[arg(long, short = 'i')]
        importance: Option<String>,

        /// Status (접수, 진행중, 대기중, 완료, 미해결완료)
        #[arg(long, short = 's')]
        status: Option<String>,

        /// Details
        #[arg(long)]
        content: Option<String>,

        /// Free-form deadline label
        #[arg(long)]
        dday: Option<String>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit fields of an existing task
    Edit {
        /// Task id
        id: i64,

        #[arg(long, short = 't')]
        title: Option<String>,

        #[arg(long, short = 'c')]
        category: Option<String>,

        #[arg(long, short = 'i')]
        importance: Option<String>,

        #[arg(long, short = 's')]
        status: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        dday: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one task
    Get {
        /// Task id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: i64,

        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct MemoCommand {
    #[command(subcommand)]
    pub action: MemoAction,
}

#[derive(Subcommand, Debug)]
pub enum MemoAction {
    /// List memos
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a memo
    Add {
        /// Title (defaults to "새 메모")
        #[arg(long, short = 't')]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rename a memo
    Title { id: i64, title: String },

    /// Replace a memo's content
    Content {
        id: i64,

        /// New content (omit with --stdin)
        content: Option<String>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,
    },

    /// Expand or collapse a memo
    Toggle { id: i64 },

    /// Delete a memo
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Switch between dark and light
    Toggle,
}

#[derive(Args, Debug)]
pub struct TodoCommand {
    #[command(subcommand)]
    pub action: TodoAction,
}

#[derive(Subcommand, Debug)]
pub enum TodoAction {
    /// List to-do items
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an item
    Add {
        /// Item text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Mark an item done or not done
    Toggle { id: i64 },

    /// Delete an item
    Delete { id: i64 },

    /// Remove every completed item
    Clear,
}
