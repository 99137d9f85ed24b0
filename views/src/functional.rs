//! Module definitions to the definitions they use.

use crate::engine::ViewEngine;
use crate::error::ViewResult;
use sbolgraph_graph::{materialize, Graph, ViewEdge};
use sbolgraph_vocab::Predicate;
use tracing::debug;

impl<'g> ViewEngine<'g> {
    /// `md -> definition` labeled `in` for each functional component, and
    /// `md -> definition` labeled `inside` for each nested module.
    ///
    /// Fails if a functional component or module has no `definition`.
    pub fn functional_edges(&self) -> ViewResult<Vec<ViewEdge>> {
        let mut edges = Vec::new();
        for md in self.query.module_definitions() {
            for fc in self.query.functional_components(md) {
                let definition = self.query.definition(fc)?;
                edges.push(ViewEdge::direct(md, Predicate::FunctionalComponent.as_str(), definition, "in"));
            }
            for module in self.query.modules(md) {
                let definition = self.query.definition(module)?;
                edges.push(ViewEdge::direct(md, Predicate::Module.as_str(), definition, "inside"));
            }
        }
        debug!(edges = edges.len(), "functional view");
        Ok(edges)
    }

    pub fn functional_view(&self) -> ViewResult<Graph> {
        let edges = self.functional_edges()?;
        let overrides = self.role_overrides(&edges);
        Ok(materialize(edges, Some(&overrides)))
    }
}
