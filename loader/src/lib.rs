//! SBOL Loader
//!
//! Reads serialized RDF (N-Triples, Turtle, RDF/XML) into statements and
//! statement stores. Parsing is delegated to the `sophia` parsers; this
//! crate only converts their terms into the workspace's own.

mod error;
mod format;
mod load;

pub use error::{LoadError, LoadResult};
pub use format::{LoadOptions, RdfFormat};
pub use load::{load_file, load_store, load_store_str, load_str};
