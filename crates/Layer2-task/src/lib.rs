//! # vmagent-task
//!
//! Asynchronous task service for vmagent.
//! Tracks background work by id so an orchestrator can poll for the outcome.
//!
//! ## Features
//!
//! - Task records with a `Running` -> `Done` | `Failed` state machine
//! - Separate create and start steps; parallelism through explicit spawning
//! - Race-free lookups of task snapshots while tasks complete
//! - Completion callbacks fired after the outcome is visible

pub mod fakes;
pub mod service;
pub mod state;
pub mod task;

pub use fakes::FakeTaskService;
pub use service::{AsyncTaskService, TaskService};
pub use state::TaskState;
pub use task::{Task, TaskEndFunc, TaskError, TaskFunc, TaskOutcome};
