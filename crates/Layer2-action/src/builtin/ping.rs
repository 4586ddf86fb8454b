//! Ping action - liveness probe

use crate::error::Result;
use crate::Action;
use async_trait::async_trait;
use serde_json::Value;

/// Answers `"pong"`
#[derive(Debug, Default)]
pub struct PingAction;

impl PingAction {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Action for PingAction {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn is_asynchronous(&self) -> bool {
        false
    }

    fn is_persistent(&self) -> bool {
        false
    }

    async fn run(&self, _args: Vec<Value>) -> Result<Value> {
        Ok(Value::String("pong".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping() {
        let action = PingAction::new();
        assert!(!action.is_asynchronous());
        assert!(!action.is_persistent());
        assert_eq!(action.run(vec![]).await.unwrap(), "pong");
    }
}
