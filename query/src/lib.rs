//! SBOL Query
//!
//! Named lookups over a statement graph, one per statement shape of the
//! SBOL vocabulary.
//!
//! Responsibilities:
//! - Resolve typed objects (component definitions, interactions, ...)
//! - Walk required references (`participant -> definition`) and report the
//!   offending node when one is missing
//! - Translate roles and types to readable names, degrading to `"Unknown"`

mod error;
mod lookup;
mod structure;

pub use error::{QueryError, QueryResult};
pub use lookup::SbolQuery;
pub use structure::OrderedLocation;
