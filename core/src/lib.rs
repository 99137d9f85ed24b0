//! SBOL Graph Core Types
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Identity types (NodeId, EdgeId)
//! - Statement terms (Iri, Literal, Term) and the Statement triple
//! - Value types (the Value enum stored in node and edge attributes)
//! - Common error types

mod error;
mod id;
mod statement;
mod term;
mod value;

pub use error::*;
pub use id::*;
pub use statement::*;
pub use term::*;
pub use value::*;
