use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("Not in a taskboard project. Run 'taskboard init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .taskboard/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Task not found: {0}")]
    TaskNotFound(i64),

    #[error("Memo not found: {0}")]
    MemoNotFound(i64),

    #[error("To-do item not found: {0}")]
    TodoNotFound(i64),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Stored value under '{key}' is not valid JSON: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Loro error: {0}")]
    Loro(#[from] loro::LoroError),

    #[error("Loro encode error: {0}")]
    LoroEncode(#[from] loro::LoroEncodeError),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, TaskboardError>;
