//! Variable components of combinatorial derivations.

use crate::engine::ViewEngine;
use crate::error::ViewResult;
use sbolgraph_graph::{materialize, Graph, ViewEdge};
use sbolgraph_vocab::{ObjectType, Predicate};
use tracing::debug;

impl<'g> ViewEngine<'g> {
    /// For every combinatorial derivation: an edge to its strategy, and for
    /// each variable component, edges to its variable, operator, variants
    /// and the definition members of its variant collections.
    ///
    /// Fails if a variable component has no `variable` or `operator`.
    pub fn derivation_edges(&self) -> ViewResult<Vec<ViewEdge>> {
        let mut edges = Vec::new();
        for derivation in self.query.combinatorial_derivations() {
            if let Some(strategy) = self.query.strategy(derivation) {
                edges.push(ViewEdge::direct(derivation, Predicate::Strategy.as_str(), strategy, "strategy"));
            }
            for vc in self.query.variable_components(derivation) {
                edges.push(ViewEdge::direct(
                    derivation,
                    Predicate::VariableComponent.as_str(),
                    vc,
                    "variableComponent",
                ));
                let variable = self.query.variable(vc)?;
                edges.push(ViewEdge::direct(vc, Predicate::Variable.as_str(), variable, "variable"));
                let operator = self.query.operator(vc)?;
                edges.push(ViewEdge::direct(vc, Predicate::Operator.as_str(), operator, "operator"));

                for variant in self.query.variants(vc) {
                    edges.push(ViewEdge::direct(vc, Predicate::Variant.as_str(), variant, "variant"));
                }
                for collection in self.query.variant_collections(vc) {
                    for member in self.query.members(collection) {
                        if self.query.is_a(member, ObjectType::ComponentDefinition) {
                            edges.push(ViewEdge::direct(vc, Predicate::Variant.as_str(), member, "variant"));
                        }
                    }
                }
            }
        }
        debug!(edges = edges.len(), "combinatorial derivation view");
        Ok(edges)
    }

    pub fn derivation_view(&self) -> ViewResult<Graph> {
        let edges = self.derivation_edges()?;
        let overrides = self.role_overrides(&edges);
        Ok(materialize(edges, Some(&overrides)))
    }
}
