//! Request DTOs for the HTTP API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::recorder::Failure;

/// Request body for the SET operation (PUT /set)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Request body for capturing a failure (POST /errors)
#[derive(Debug, Clone, Deserialize)]
pub struct RecordErrorRequest {
    /// Failure message, unredacted
    pub message: String,
    /// Optional stack text identifying the failure
    #[serde(default)]
    pub stack: Option<String>,
    /// Query the failing search ran for
    pub query: String,
    /// Extra metadata merged into the record context
    #[serde(default)]
    pub context: Option<Map<String, Value>>,
}

impl RecordErrorRequest {
    pub fn failure(&self) -> Failure {
        Failure {
            message: self.message.clone(),
            stack: self.stack.clone(),
        }
    }
}
