//! Action errors

use thiserror::Error;
use vmagent_task::TaskError;

/// Result type for action runs
pub type Result<T> = std::result::Result<T, ActionError>;

/// Error returned by an action run; its message becomes the response exception
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Task with id {0} could not be found")]
    TaskNotFound(String),

    /// A polled task failed; shown exactly as the task stored it
    #[error(transparent)]
    TaskFailed(#[from] TaskError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("unknown message {0}")]
    UnknownAction(String),
}

impl ActionError {
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        ActionError::InvalidArguments(message.into())
    }
}
