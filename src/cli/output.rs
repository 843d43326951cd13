//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::NodeError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &NodeError) -> String {
    match e {
        NodeError::UnknownNode(id) => {
            format!("Unknown node: {}. Run `nodepack nodes list` to see registered nodes.", id)
        }
        other => other.to_string(),
    }
}
