//! Query error types.

use sbolgraph_core::{GraphError, Term};
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while resolving a lookup.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A required reference is absent from the design.
    #[error("{node} has no '{predicate}' reference")]
    MissingReference { node: Term, predicate: String },

    /// A literal that must hold a value of some type does not.
    #[error("{node} has {predicate} '{lexical}', expected {expected}")]
    InvalidLiteral {
        node: Term,
        predicate: String,
        lexical: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl QueryError {
    pub fn missing_reference(node: &Term, predicate: impl Into<String>) -> Self {
        Self::MissingReference {
            node: node.clone(),
            predicate: predicate.into(),
        }
    }

    pub fn invalid_literal(
        node: &Term,
        predicate: impl Into<String>,
        lexical: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidLiteral {
            node: node.clone(),
            predicate: predicate.into(),
            lexical: lexical.into(),
            expected,
        }
    }

    /// The node the error is about, when there is one.
    pub fn node(&self) -> Option<&Term> {
        match self {
            Self::MissingReference { node, .. } | Self::InvalidLiteral { node, .. } => Some(node),
            Self::Graph(_) => None,
        }
    }
}
