//! The ownership hierarchy of a design.

use crate::engine::ViewEngine;
use sbolgraph_graph::{materialize, Graph, ViewEdge};
use sbolgraph_vocab::{ObjectType, Predicate};
use tracing::debug;

impl<'g> ViewEngine<'g> {
    /// One `parent -> child` edge per ownership statement, labeled by the
    /// predicate. `component` only counts when the owner is a component
    /// definition; an annotation's `component` points at a sibling instance.
    pub fn parent_edges(&self) -> Vec<ViewEdge> {
        let mut edges = Vec::new();
        for statement in self.graph.edges().flat_map(|e| e.statements()) {
            let predicate = Predicate::from_iri(statement.predicate().as_str());
            let owns = predicate.is_ownership()
                || (predicate == Predicate::Component
                    && self.query.is_a(statement.subject(), ObjectType::ComponentDefinition));
            if !owns {
                continue;
            }
            edges.push(ViewEdge::new(
                statement.subject().clone(),
                statement.object().clone(),
                statement.clone(),
                predicate.name(),
            ));
        }
        debug!(edges = edges.len(), "parent view");
        edges
    }

    pub fn parent_view(&self) -> Graph {
        let edges = self.parent_edges();
        let overrides = self.role_overrides(&edges);
        materialize(edges, Some(&overrides))
    }
}
