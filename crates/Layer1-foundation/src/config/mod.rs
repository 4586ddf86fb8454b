//! Config - agent settings
//!
//! - `agent.rs` - AgentConfig (logging, identity)

mod agent;

pub use agent::{AgentConfig, AGENT_CONFIG_FILE};
