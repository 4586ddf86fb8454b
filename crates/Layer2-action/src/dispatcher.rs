//! Action Dispatcher - routes requests to actions
//!
//! Synchronous actions run inline. Asynchronous actions become tasks: the
//! dispatcher creates the task, spawns `start_task` on its own tokio task and
//! answers right away with the running status, which the orchestrator then
//! polls through `get_task`.

use crate::builtin::get_task::RunningTaskValue;
use crate::error::ActionError;
use crate::message::{Request, Response};
use crate::registry::ActionRegistry;
use crate::Action;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};
use vmagent_task::{Task, TaskEndFunc, TaskError, TaskFunc, TaskService};

/// Dispatches requests against a registry
pub struct ActionDispatcher {
    registry: Arc<ActionRegistry>,
    task_service: Arc<dyn TaskService>,
}

impl ActionDispatcher {
    pub fn new(registry: Arc<ActionRegistry>, task_service: Arc<dyn TaskService>) -> Self {
        Self {
            registry,
            task_service,
        }
    }

    /// Handle one request. Failures are reported in the response, never raised.
    pub async fn dispatch(&self, request: Request) -> Response {
        let Request {
            method, arguments, ..
        } = request;

        let Some(action) = self.registry.get(&method) else {
            warn!("Unknown action {}", method);
            return Response::exception(ActionError::UnknownAction(method).to_string());
        };

        info!(
            "Dispatching {} (async: {}, persistent: {})",
            method,
            action.is_asynchronous(),
            action.is_persistent()
        );

        if action.is_asynchronous() {
            self.dispatch_async(method, action, arguments)
        } else {
            match action.run(arguments).await {
                Ok(value) => Response::value(value),
                Err(e) => {
                    debug!("Action {} failed: {}", method, e);
                    Response::exception(e.to_string())
                }
            }
        }
    }

    fn dispatch_async(
        &self,
        method: String,
        action: Arc<dyn Action>,
        args: Vec<Value>,
    ) -> Response {
        let work: TaskFunc = Box::pin(async move {
            action
                .run(args)
                .await
                .map_err(|e| TaskError::from_error(&e))
        });

        let finished_method = method.clone();
        let on_complete: TaskEndFunc = Box::new(move |task: Task| {
            if task.state.is_success() {
                info!("Task {} ({}) done", task.id, finished_method);
            } else {
                warn!(
                    "Task {} ({}) failed: {}",
                    task.id,
                    finished_method,
                    task.error().map(|e| e.message()).unwrap_or_default()
                );
            }
        });

        let task = match self.task_service.create_task(work, Some(on_complete)) {
            Ok(task) => task,
            Err(e) => {
                warn!("Could not create task for {}: {}", method, e);
                return Response::exception(e.to_string());
            }
        };

        let status = RunningTaskValue::new(task.id.clone()).to_value();

        let service = Arc::clone(&self.task_service);
        tokio::spawn(async move {
            service.start_task(&task).await;
        });

        Response::value(status)
    }
}
