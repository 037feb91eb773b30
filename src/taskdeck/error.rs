use thiserror::Error;

/// Rejections raised while creating or editing tasks and categories.
///
/// These never leave the collection in a half-edited state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title required")]
    TitleRequired,

    #[error("invalid date range")]
    InvalidDateRange,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("category already exists: {0}")]
    DuplicateCategory(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Task not found: {0}")]
    TaskNotFound(usize),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TaskError>;
