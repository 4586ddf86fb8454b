//! Task Service - creates, runs and tracks background tasks
//!
//! Creation and execution are separate steps: `create_task*` registers a
//! `Running` record and parks its work, `start_task` runs the parked work and
//! commits the outcome. `start_task` only returns once the work has finished;
//! callers that want tasks to run in parallel spawn it themselves:
//!
//! ```ignore
//! let task = service.create_task(work, None)?;
//! let runner = service.clone();
//! tokio::spawn(async move { runner.start_task(&task).await });
//! ```

use crate::task::{Task, TaskEndFunc, TaskError, TaskFunc, TaskOutcome};
use async_trait::async_trait;
use futures::FutureExt;
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use vmagent_foundation::{Error, IdGenerator, Result};

/// Operations every task service provides
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Create a task named by the id generator. Nothing is registered if
    /// generation fails.
    fn create_task(&self, work: TaskFunc, on_complete: Option<TaskEndFunc>) -> Result<Task>;

    /// Create a task with a caller-chosen id. An existing task with the same
    /// id is replaced.
    fn create_task_with_id(
        &self,
        id: &str,
        work: TaskFunc,
        on_complete: Option<TaskEndFunc>,
    ) -> Task;

    /// Run the task's work to completion and commit its outcome
    async fn start_task(&self, task: &Task);

    /// Snapshot of the task with this id
    fn find_task_with_id(&self, id: &str) -> Option<Task>;
}

/// Work parked between creation and start
struct PendingRun {
    /// Creation the work belongs to
    generation: u64,
    work: TaskFunc,
    on_complete: Option<TaskEndFunc>,
}

/// Registered record, tagged with the creation that produced it
struct Entry {
    generation: u64,
    task: Task,
}

/// In-memory task service
///
/// Cheap to clone; clones share the same registry.
#[derive(Clone)]
pub struct AsyncTaskService {
    /// All tasks by id
    tasks: Arc<RwLock<HashMap<String, Entry>>>,

    /// Work not started yet, by task id
    pending: Arc<Mutex<HashMap<String, PendingRun>>>,

    /// Names new tasks
    id_generator: Arc<dyn IdGenerator>,

    /// Source of creation generations
    next_generation: Arc<AtomicU64>,
}

impl AsyncTaskService {
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            pending: Arc::new(Mutex::new(HashMap::new())),
            id_generator,
            next_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of registered tasks
    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }

    /// Commit the outcome of `generation` and return the finished snapshot.
    ///
    /// When the id was reused by a later creation the registry is left alone
    /// and the snapshot is built from `task` instead.
    fn commit(&self, task: &Task, generation: u64, outcome: TaskOutcome) -> Task {
        let mut tasks = self.tasks.write();
        match tasks.get_mut(&task.id) {
            Some(entry) if entry.generation == generation => {
                if !entry.task.finish(outcome) {
                    warn!("Task {} already finished, outcome dropped", task.id);
                }
                entry.task.clone()
            }
            _ => {
                warn!(
                    "Task {} was replaced while running, outcome not recorded",
                    task.id
                );
                let mut finished = task.clone();
                finished.finish(outcome);
                finished
            }
        }
    }
}

#[async_trait]
impl TaskService for AsyncTaskService {
    fn create_task(&self, work: TaskFunc, on_complete: Option<TaskEndFunc>) -> Result<Task> {
        let id = self
            .id_generator
            .generate()
            .map_err(|e| Error::task(format!("Generating task id: {}", e)))?;

        Ok(self.create_task_with_id(&id, work, on_complete))
    }

    fn create_task_with_id(
        &self,
        id: &str,
        work: TaskFunc,
        on_complete: Option<TaskEndFunc>,
    ) -> Task {
        let task = Task::new(id);
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);

        // Lock order: tasks, then pending
        let mut tasks = self.tasks.write();
        let mut pending = self.pending.lock();
        let entry = Entry {
            generation,
            task: task.clone(),
        };
        if tasks.insert(id.to_string(), entry).is_some() {
            debug!("Task {} replaced an existing task with the same id", id);
        }
        pending.insert(
            id.to_string(),
            PendingRun {
                generation,
                work,
                on_complete,
            },
        );

        debug!("Created task {}", id);
        task
    }

    async fn start_task(&self, task: &Task) {
        let run = self.pending.lock().remove(&task.id);
        let Some(PendingRun {
            generation,
            work,
            on_complete,
        }) = run
        else {
            warn!("Task {} has no pending work; already started?", task.id);
            return;
        };

        debug!("Starting task {}", task.id);

        let outcome = match AssertUnwindSafe(work).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                warn!("Task {} panicked: {}", task.id, message);
                Err(TaskError::new(format!("task panicked: {}", message)))
            }
        };

        let finished = self.commit(task, generation, outcome);

        debug!("Task {} finished: {}", finished.id, finished.state);

        if let Some(on_complete) = on_complete {
            on_complete(finished);
        }
    }

    fn find_task_with_id(&self, id: &str) -> Option<Task> {
        self.tasks.read().get(id).map(|entry| entry.task.clone())
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
