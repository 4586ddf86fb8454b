//! Storage module for vmagent
//!
//! - `json`: JSON documents on disk (configuration)

mod json;

pub use json::JsonStore;
