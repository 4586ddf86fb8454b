//! Action Registry - actions by method name

use crate::builtin::{get_task::GetTaskAction, ping::PingAction};
use crate::Action;
use std::collections::HashMap;
use std::sync::Arc;
use vmagent_task::TaskService;

/// Registry of invocable actions
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Create a registry with the builtin actions
    pub fn with_builtins(task_service: Arc<dyn TaskService>) -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(GetTaskAction::new(task_service)));
        registry.register(Arc::new(PingAction::new()));

        registry
    }

    /// Register an action, replacing any action with the same name
    pub fn register(&mut self, action: Arc<dyn Action>) {
        self.actions.insert(action.name().to_string(), action);
    }

    /// Get an action by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
