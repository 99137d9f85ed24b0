//! SBOL Graph Storage
//!
//! This crate provides the statement store and the graph arena every view is
//! built on:
//! - Node and edge storage addressed by integer ids, edges keyed by endpoint pair
//! - Adjacency index: find edges from/to a node, or between two nodes
//! - Pattern search over collapsed statements, neighbor retrieval by predicate
//! - Destructive pruning and display-name labeling
//! - The subgraph materializer that turns a view's edge list into a fresh graph
//! - Light structural analysis (degree, density, reachability, path lengths)

mod analysis;
mod config;
mod graph;
mod index;
mod label;
mod materialize;
mod pattern;
mod prune;
mod search;
mod store;

pub use analysis::*;
pub use config::*;
pub use graph::*;
pub use label::*;
pub use materialize::*;
pub use pattern::*;
pub use prune::*;
pub use search::*;
pub use store::*;
