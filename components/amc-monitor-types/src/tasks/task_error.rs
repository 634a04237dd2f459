use thiserror::Error;

/// Errors that can occur while validating or parsing tasks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task title cannot be empty.")]
    EmptyTitle,
    #[error("Unknown task status: {0}")]
    UnknownStatus(String),
    #[error("Unknown task priority: {0}")]
    UnknownPriority(String),
}
