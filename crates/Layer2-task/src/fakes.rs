//! Fake task service for testing consumers of [`TaskService`]

use crate::service::TaskService;
use crate::task::{Task, TaskEndFunc, TaskFunc};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use vmagent_foundation::Result;

/// Task service backed by a plain map the test fills in directly.
///
/// Created tasks are recorded but their work never runs.
#[derive(Default)]
pub struct FakeTaskService {
    /// Tasks visible to `find_task_with_id`
    pub started_tasks: Mutex<HashMap<String, Task>>,

    /// Ids passed to `start_task`, in call order
    pub start_calls: Mutex<Vec<String>>,

    next_id: Mutex<u64>,
}

impl FakeTaskService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a task visible to lookups
    pub fn insert_task(&self, task: Task) {
        self.started_tasks.lock().insert(task.id.clone(), task);
    }

    pub fn clear(&self) {
        self.started_tasks.lock().clear();
    }
}

#[async_trait]
impl TaskService for FakeTaskService {
    fn create_task(&self, work: TaskFunc, on_complete: Option<TaskEndFunc>) -> Result<Task> {
        let id = {
            let mut next = self.next_id.lock();
            *next += 1;
            format!("fake-task-{}", next)
        };
        Ok(self.create_task_with_id(&id, work, on_complete))
    }

    fn create_task_with_id(
        &self,
        id: &str,
        _work: TaskFunc,
        _on_complete: Option<TaskEndFunc>,
    ) -> Task {
        let task = Task::new(id);
        self.insert_task(task.clone());
        task
    }

    async fn start_task(&self, task: &Task) {
        self.start_calls.lock().push(task.id.clone());
    }

    fn find_task_with_id(&self, id: &str) -> Option<Task> {
        self.started_tasks.lock().get(id).cloned()
    }
}
