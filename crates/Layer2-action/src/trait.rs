//! Action trait and argument helpers

use crate::error::{ActionError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Action trait - implement this to add a new agent action
///
/// The dispatcher runs synchronous actions inline and hands asynchronous ones
/// to the task service, answering with the new task's running status.
#[async_trait]
pub trait Action: Send + Sync {
    /// Method name the orchestrator uses to invoke this action
    fn name(&self) -> &'static str;

    /// Whether the dispatcher should run this action as a background task
    fn is_asynchronous(&self) -> bool;

    /// Whether the action's effects must survive agent restarts.
    /// Only a signal; persisting is up to the caller.
    fn is_persistent(&self) -> bool;

    /// Run with the positional arguments of the request
    async fn run(&self, args: Vec<Value>) -> Result<Value>;
}

/// Decode the positional argument at `index`
pub fn argument<T: DeserializeOwned>(args: &[Value], index: usize) -> Result<T> {
    let value = args.get(index).ok_or_else(|| {
        ActionError::invalid_arguments(format!(
            "expected at least {} argument(s), got {}",
            index + 1,
            args.len()
        ))
    })?;

    serde_json::from_value(value.clone())
        .map_err(|e| ActionError::invalid_arguments(format!("argument {}: {}", index, e)))
}
