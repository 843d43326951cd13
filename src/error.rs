//! Error types for the node pack.
//!
//! Only host-integration failures are errors. Domain edge cases of node
//! evaluation (empty slot sets, out-of-range indices, null slots) resolve to
//! defined outputs and never surface here.

use thiserror::Error;

/// Node evaluation, registry, and configuration errors
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Node '{node}' is missing required input '{input}'")]
    MissingInput { node: String, input: String },

    #[error("Node '{node}' received an invalid value for input '{input}': {reason}")]
    InvalidInput {
        node: String,
        input: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for NodeError {
    fn from(err: config::ConfigError) -> Self {
        NodeError::ConfigError(err.to_string())
    }
}
