//! Common error types for graph operations.

use crate::{EdgeId, NodeId};
use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Node not found.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Edge not found.
    #[error("Edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// A search pattern could not be built or parsed.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// An in/out-edge query was made against an undirected graph.
    #[error("Operation '{operation}' requires a directed graph")]
    DirectionalOperationOnUndirectedGraph { operation: &'static str },
}

impl GraphError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    pub fn undirected(operation: &'static str) -> Self {
        Self::DirectionalOperationOnUndirectedGraph { operation }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
