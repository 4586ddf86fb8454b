//! Wire shapes of agent requests and responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Action invocation delivered by the transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Action name
    pub method: String,

    /// Positional arguments
    #[serde(default)]
    pub arguments: Vec<Value>,

    /// Where the transport should send the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

impl Request {
    pub fn new(method: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            arguments,
            reply_to: None,
        }
    }
}

/// Failure half of a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseException {
    pub message: String,
}

/// Either `{"value": ...}` or `{"exception": {"message": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<ResponseException>,
}

impl Response {
    pub fn value(value: Value) -> Self {
        Self {
            value: Some(value),
            exception: None,
        }
    }

    pub fn exception(message: impl Into<String>) -> Self {
        Self {
            value: None,
            exception: Some(ResponseException {
                message: message.into(),
            }),
        }
    }

    pub fn is_exception(&self) -> bool {
        self.exception.is_some()
    }
}
