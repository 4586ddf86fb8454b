//! Builtin actions for vmagent

pub mod get_task;
pub mod ping;
