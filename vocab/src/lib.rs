//! SBOL Vocabulary
//!
//! The fixed, read-only table of identifiers a design is written in, and
//! the lookups that turn them into readable category names:
//! - Namespaces and prefix expansion
//! - Predicates and object types as closed enums
//! - Component types with their role tables, interaction types, participant roles
//! - Name translation that resolves unrecognized identifiers to `"Unknown"`
//!
//! Every enum carries an explicit `Unrecognized` variant, and each IRI index
//! is built once on first use and never mutated afterwards.

#[macro_use]
mod namespace;
mod error;
mod table;
mod terms;

pub use error::{VocabError, VocabResult};
pub use namespace::*;
pub use table::*;
pub use terms::*;
