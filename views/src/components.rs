//! Component definitions to the definitions of their sub-components.

use crate::engine::ViewEngine;
use crate::error::ViewResult;
use sbolgraph_graph::{derive_name, materialize, Graph, TermPattern, ViewEdge};
use sbolgraph_vocab::{ObjectType, Predicate};
use tracing::debug;

impl<'g> ViewEngine<'g> {
    /// One edge `parent cd -> child cd` per `(cd, component, instance)`
    /// statement, where the child is the instance's definition.
    ///
    /// Fails if an instance has no `definition`.
    pub fn components_edges(&self) -> ViewResult<Vec<ViewEdge>> {
        let hits = self.graph.search(
            &TermPattern::Any,
            &TermPattern::one(Predicate::Component.as_str()),
            &TermPattern::Any,
        );
        let mut edges = Vec::new();
        for hit in hits {
            if !self.query.is_a(hit.subject, ObjectType::ComponentDefinition) {
                continue;
            }
            let child = self.query.definition(hit.object)?;
            let statement = hit.edge.first_statement().clone();
            let label = derive_name(statement.predicate().as_str()).to_string();
            edges.push(ViewEdge::new(hit.subject.clone(), child.clone(), statement, label));
        }
        debug!(edges = edges.len(), "components view");
        Ok(edges)
    }

    pub fn components_view(&self) -> ViewResult<Graph> {
        let edges = self.components_edges()?;
        let overrides = self.role_overrides(&edges);
        Ok(materialize(edges, Some(&overrides)))
    }
}
