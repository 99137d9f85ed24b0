//! Pattern search and neighbor retrieval.

use crate::graph::{Edge, Graph};
use crate::pattern::{TermPattern, TriplePattern};
use sbolgraph_core::Term;

/// One search match: the first collapsed statement's endpoints and its edge.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'g> {
    pub subject: &'g Term,
    pub object: &'g Term,
    pub edge: &'g Edge,
}

impl Graph {
    /// Every edge whose first collapsed statement matches all three fields,
    /// in edge insertion order. An empty result is not an error.
    pub fn search(
        &self,
        subject: &TermPattern,
        predicate: &TermPattern,
        object: &TermPattern,
    ) -> Vec<SearchHit<'_>> {
        self.edges()
            .filter_map(|edge| {
                let first = edge.first_statement();
                let hit = subject.matches(first.subject())
                    && predicate.matches_iri(first.predicate())
                    && object.matches(first.object());
                hit.then_some(SearchHit {
                    subject: first.subject(),
                    object: first.object(),
                    edge,
                })
            })
            .collect()
    }

    /// Search with a prebuilt triple pattern.
    pub fn search_pattern(&self, pattern: &TriplePattern) -> Vec<SearchHit<'_>> {
        self.search(&pattern.subject, &pattern.predicate, &pattern.object)
    }

    /// The object of the first statement about `node` that uses `predicate`.
    ///
    /// Every statement collapsed onto the node's edges is considered, not
    /// only the first one, so a predicate hidden behind another statement
    /// to the same object is still found.
    pub fn retrieve_node(&self, node: &Term, predicate: &str) -> Option<&Term> {
        let id = self.node_id(node)?;
        self.incident_edges(id).find_map(|edge| {
            edge.statements()
                .iter()
                .find(|s| s.subject() == node && s.predicate() == predicate)
                .map(|s| s.object())
        })
    }

    /// Objects of every statement about `node` using any of `predicates`,
    /// one entry per edge, in edge insertion order.
    pub fn retrieve_nodes(&self, node: &Term, predicates: &[&str]) -> Vec<&Term> {
        let Some(id) = self.node_id(node) else {
            return Vec::new();
        };
        self.incident_edges(id)
            .filter_map(|edge| {
                edge.statements()
                    .iter()
                    .find(|s| {
                        s.subject() == node
                            && predicates.iter().any(|p| s.predicate() == *p)
                    })
                    .map(|s| s.object())
            })
            .collect()
    }
}
