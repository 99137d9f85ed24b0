//! Definitions to the definitions of everything they contain.

use crate::engine::ViewEngine;
use crate::error::ViewResult;
use sbolgraph_graph::{derive_name, materialize, Graph, TermPattern, ViewEdge};
use sbolgraph_vocab::{ObjectType, Predicate};
use tracing::debug;

impl<'g> ViewEngine<'g> {
    /// `(cd, component, c)` and `(md, functionalComponent, fc)` statements,
    /// each resolved to `owner -> definition`.
    pub fn parts_edges(&self) -> ViewResult<Vec<ViewEdge>> {
        let predicates = TermPattern::any_of([
            Predicate::Component.as_str(),
            Predicate::FunctionalComponent.as_str(),
        ])?;
        let hits = self.graph.search(&TermPattern::Any, &predicates, &TermPattern::Any);
        let mut edges = Vec::new();
        for hit in hits {
            let owner_is_definition = self.query.is_a(hit.subject, ObjectType::ComponentDefinition)
                || self.query.is_a(hit.subject, ObjectType::ModuleDefinition);
            if !owner_is_definition {
                continue;
            }
            let definition = self.query.definition(hit.object)?;
            let statement = hit.edge.first_statement().clone();
            let label = derive_name(statement.predicate().as_str()).to_string();
            edges.push(ViewEdge::new(hit.subject.clone(), definition.clone(), statement, label));
        }
        debug!(edges = edges.len(), "parts view");
        Ok(edges)
    }

    pub fn parts_view(&self) -> ViewResult<Graph> {
        let edges = self.parts_edges()?;
        let overrides = self.role_overrides(&edges);
        Ok(materialize(edges, Some(&overrides)))
    }
}
