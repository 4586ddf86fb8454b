//! Task state machine
//!
//! `Running` -> `Done` | `Failed`. Both outcomes are terminal.

use crate::task::TaskError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Possible states of a task
///
/// The outcome payload lives inside the terminal variant, so a task can
/// never carry both a value and an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "result", rename_all = "snake_case")]
pub enum TaskState {
    /// Work accepted, not finished yet
    Running,

    /// Work function returned a value
    Done(Value),

    /// Work function returned an error
    Failed(TaskError),
}

impl TaskState {
    /// Check if this is a terminal state (cannot transition further)
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Done(_) | TaskState::Failed(_))
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TaskState::Running)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TaskState::Done(_))
    }

    /// Wire name of the state
    pub fn name(&self) -> &'static str {
        match self {
            TaskState::Running => "running",
            TaskState::Done(_) => "done",
            TaskState::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_terminal_states() {
        assert!(!TaskState::Running.is_terminal());
        assert!(TaskState::Done(json!(1)).is_terminal());
        assert!(TaskState::Failed(TaskError::new("boom")).is_terminal());
    }

    #[test]
    fn test_names() {
        assert_eq!(TaskState::Running.to_string(), "running");
        assert_eq!(TaskState::Done(Value::Null).name(), "done");
        assert_eq!(TaskState::Failed(TaskError::new("x")).name(), "failed");
    }

    #[test]
    fn test_serialize_shape() {
        let running = serde_json::to_value(TaskState::Running).unwrap();
        assert_eq!(running, json!({"state": "running"}));

        let done = serde_json::to_value(TaskState::Done(json!("v"))).unwrap();
        assert_eq!(done, json!({"state": "done", "result": "v"}));
    }
}
