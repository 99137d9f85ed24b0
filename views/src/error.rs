//! View error types.

use sbolgraph_core::GraphError;
use sbolgraph_query::QueryError;
use thiserror::Error;

/// Result type for view transforms.
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors that can occur while producing a view.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A view name that does not match any [`ViewKind`](crate::ViewKind).
    #[error("Unknown view: {0}")]
    UnknownView(String),
}

impl ViewError {
    pub fn unknown_view(name: impl Into<String>) -> Self {
        Self::UnknownView(name.into())
    }
}
