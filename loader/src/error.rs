//! Loader error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while loading a design.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} document: {message}")]
    Parse { format: &'static str, message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A term kind statements cannot hold, e.g. a variable or quoted triple.
    #[error("Unsupported {position} term: {term}")]
    UnsupportedTerm { position: &'static str, term: String },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }

    pub fn unsupported_format(what: impl Into<String>) -> Self {
        Self::UnsupportedFormat(what.into())
    }

    pub fn unsupported_term(position: &'static str, term: impl Into<String>) -> Self {
        Self::UnsupportedTerm {
            position,
            term: term.into(),
        }
    }
}
