//! # vmagent-action
//!
//! Action system for vmagent providing:
//! - Action trait and registry
//! - Builtin actions (get_task, ping)
//! - Request/response wire types
//! - Dispatcher that runs synchronous actions inline and asynchronous
//!   actions as tracked tasks

pub mod builtin;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod registry;
pub mod r#trait;

pub use dispatcher::ActionDispatcher;
pub use error::{ActionError, Result};
pub use message::{Request, Response, ResponseException};
pub use r#trait::{argument, Action};
pub use registry::ActionRegistry;

// Re-export builtin actions
pub use builtin::{
    get_task::{GetTaskAction, RunningTaskValue},
    ping::PingAction,
};
