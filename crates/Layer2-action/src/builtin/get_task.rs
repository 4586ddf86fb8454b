//! Get Task action - polls the task service for a task's outcome
//!
//! Running tasks answer with a status object, finished tasks with their raw
//! value or raw error. Orchestrators rely on this asymmetry to tell "still
//! working" from "finished".

use crate::error::{ActionError, Result};
use crate::r#trait::argument;
use crate::Action;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use vmagent_task::{TaskService, TaskState};

/// Status reported for a task that has not finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTaskValue {
    pub agent_task_id: String,
    pub state: String,
}

impl RunningTaskValue {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            agent_task_id: task_id.into(),
            state: TaskState::Running.name().to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "agent_task_id": self.agent_task_id,
            "state": self.state,
        })
    }
}

/// `get_task` action
pub struct GetTaskAction {
    task_service: Arc<dyn TaskService>,
}

impl GetTaskAction {
    pub fn new(task_service: Arc<dyn TaskService>) -> Self {
        Self { task_service }
    }
}

#[async_trait]
impl Action for GetTaskAction {
    fn name(&self) -> &'static str {
        "get_task"
    }

    fn is_asynchronous(&self) -> bool {
        false
    }

    fn is_persistent(&self) -> bool {
        false
    }

    async fn run(&self, args: Vec<Value>) -> Result<Value> {
        let task_id: String = argument(&args, 0)?;

        let task = self
            .task_service
            .find_task_with_id(&task_id)
            .ok_or_else(|| ActionError::TaskNotFound(task_id.clone()))?;

        match task.state {
            TaskState::Running => Ok(RunningTaskValue::new(task.id).to_value()),
            TaskState::Failed(err) => Err(ActionError::TaskFailed(err)),
            TaskState::Done(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vmagent_task::{FakeTaskService, Task, TaskError};

    fn setup() -> (Arc<FakeTaskService>, GetTaskAction) {
        let task_service = Arc::new(FakeTaskService::new());
        let action = GetTaskAction::new(task_service.clone());
        (task_service, action)
    }

    #[test]
    fn test_is_synchronous() {
        let (_, action) = setup();
        assert!(!action.is_asynchronous());
    }

    #[test]
    fn test_is_not_persistent() {
        let (_, action) = setup();
        assert!(!action.is_persistent());
    }

    #[tokio::test]
    async fn test_returns_running_task() {
        let (task_service, action) = setup();
        task_service.insert_task(Task::new("fake-task-id"));

        let value = action.run(vec![json!("fake-task-id")]).await.unwrap();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"agent_task_id":"fake-task-id","state":"running"}"#
        );
    }

    #[tokio::test]
    async fn test_returns_failed_task() {
        let (task_service, action) = setup();
        let mut task = Task::new("fake-task-id");
        task.finish(Err(TaskError::new("fake-task-error")));
        task_service.insert_task(task);

        let err = action.run(vec![json!("fake-task-id")]).await.unwrap_err();
        assert_eq!(err.to_string(), "fake-task-error");
        assert!(matches!(err, ActionError::TaskFailed(_)));
    }

    #[tokio::test]
    async fn test_returns_successful_task() {
        let (task_service, action) = setup();
        let mut task = Task::new("fake-task-id");
        task.finish(Ok(json!("some-task-value")));
        task_service.insert_task(task);

        let value = action.run(vec![json!("fake-task-id")]).await.unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""some-task-value""#);
    }

    #[tokio::test]
    async fn test_returns_error_when_task_not_found() {
        let (task_service, action) = setup();
        task_service.clear();

        let err = action.run(vec![json!("fake-task-id")]).await.unwrap_err();
        assert_eq!(err.to_string(), "Task with id fake-task-id could not be found");
    }

    #[tokio::test]
    async fn test_rejects_missing_task_id() {
        let (_, action) = setup();

        let err = action.run(vec![]).await.unwrap_err();
        assert!(matches!(err, ActionError::InvalidArguments(_)));
    }
}
