//! Vocabulary error types.

use thiserror::Error;

/// Result type for strict vocabulary conversions.
pub type VocabResult<T> = Result<T, VocabError>;

/// Errors from strict (`TryFrom`) vocabulary conversions.
///
/// Name lookups never produce this; they fall back to `"Unknown"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabError {
    #[error("Unknown {category} term: {iri}")]
    UnknownTerm { category: &'static str, iri: String },
}

impl VocabError {
    pub fn unknown_term(category: &'static str, iri: impl Into<String>) -> Self {
        Self::UnknownTerm {
            category,
            iri: iri.into(),
        }
    }
}
