//! Task record and work function types

use crate::state::TaskState;
use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Outcome of a work function
pub type TaskOutcome = std::result::Result<Value, TaskError>;

/// Work executed by a task
///
/// A boxed future is lazy: nothing runs until the service polls it in
/// `start_task`.
pub type TaskFunc = BoxFuture<'static, TaskOutcome>;

/// Called once with the finished task, after its terminal state is committed
pub type TaskEndFunc = Box<dyn FnOnce(Task) + Send + 'static>;

/// Failure stored in a `Failed` task
///
/// Displays as its message, unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct TaskError {
    message: String,
}

impl TaskError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Capture any error by its display text
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::new(err.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Snapshot of one unit of background work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier
    pub id: String,

    /// Current state, including the outcome once terminal
    #[serde(flatten)]
    pub state: TaskState,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task reached a terminal state
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a running task
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: TaskState::Running,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Record the outcome of the work function.
    ///
    /// Returns `false` and leaves the task untouched if it is already terminal.
    pub fn finish(&mut self, outcome: TaskOutcome) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = match outcome {
            Ok(value) => TaskState::Done(value),
            Err(err) => TaskState::Failed(err),
        };
        self.completed_at = Some(Utc::now());
        true
    }

    /// Result value, only when done
    pub fn value(&self) -> Option<&Value> {
        match &self.state {
            TaskState::Done(value) => Some(value),
            _ => None,
        }
    }

    /// Failure, only when failed
    pub fn error(&self) -> Option<&TaskError> {
        match &self.state {
            TaskState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }
}
