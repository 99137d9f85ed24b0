//! SBOL Views
//!
//! Derived graphs over a design: each view reads the statement graph
//! through the query layer, emits an edge list, and materializes it into
//! a fresh graph. Views never write to the store and are not cached.

mod components;
mod derivation;
mod engine;
mod error;
mod functional;
mod interaction;
mod parent;
mod parts;
mod protein;
mod sequence;
mod tree;

pub use engine::{ViewEngine, ViewKind};
pub use error::{ViewError, ViewResult};
pub use tree::into_tree;
