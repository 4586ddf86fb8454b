//! # vmagent-foundation
//!
//! Foundation layer for vmagent:
//! - Error: shared error taxonomy and `Result` alias
//! - Config: `AgentConfig` loaded from `agent.json`
//! - Storage: `JsonStore` for JSON documents on disk
//! - Id: `IdGenerator` capability used to name tasks

pub mod config;
pub mod error;
pub mod id;
pub mod storage;

pub use config::{AgentConfig, AGENT_CONFIG_FILE};
pub use error::{Error, Result};
pub use id::{FakeIdGenerator, IdGenerator, UuidGenerator};
pub use storage::JsonStore;
