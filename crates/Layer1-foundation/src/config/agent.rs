//! Agent Config - process-wide agent settings
//!
//! Loaded from `agent.json`, either from an explicit path or from the global
//! store. Missing files fall back to defaults.

use crate::storage::JsonStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name
pub const AGENT_CONFIG_FILE: &str = "agent.json";

/// Agent settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    /// Default tracing level (`RUST_LOG` still wins)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Print tracing targets in log lines
    #[serde(default)]
    pub log_target: bool,

    /// Identifier of this agent, reported at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_target: false,
            agent_id: None,
        }
    }
}

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from an explicit file, or from the global store when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!("Loading agent config from {}", path.display());
                Self::load_file(path)
            }
            None => Self::load_global(),
        }
    }

    /// Load from a specific file; the file must exist
    pub fn load_file(path: &Path) -> Result<Self> {
        let (dir, file) = split_path(path)?;
        JsonStore::new(dir).load(file)
    }

    /// Load from the global store, defaults when absent
    pub fn load_global() -> Result<Self> {
        let store = JsonStore::global()?;
        match store.load_optional::<AgentConfig>(AGENT_CONFIG_FILE)? {
            Some(config) => Ok(config),
            None => {
                debug!("No global agent config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Override the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

fn split_path(path: &Path) -> Result<(&Path, &str)> {
    let file = path
        .file_name()
        .and_then(|f| f.to_str())
        .ok_or_else(|| Error::Config(format!("Invalid config path: {}", path.display())))?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    Ok((dir, file))
}
