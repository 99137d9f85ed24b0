//! Proteins joined directly, or through non-protein intermediates, in the
//! interaction view.

use crate::engine::ViewEngine;
use crate::error::ViewResult;
use sbolgraph_core::{NodeId, Statement};
use sbolgraph_graph::{materialize, Graph, NodeOverride, NodeOverrides, ViewEdge};
use std::collections::HashSet;
use tracing::{debug, trace};

impl<'g> ViewEngine<'g> {
    /// Walk the interaction view from every protein until another protein
    /// is reached, keeping the first hop's label and predicate.
    ///
    /// Each starting protein has its own visited set of expanded
    /// intermediates, so cycles among non-proteins terminate. Proteins are
    /// never expanded.
    pub fn protein_edges(&self, interactions: &Graph) -> ViewResult<Vec<ViewEdge>> {
        let is_protein = |id: NodeId| {
            interactions
                .node(id)
                .is_some_and(|n| self.is_protein(&n.term))
        };

        let mut edges = Vec::new();
        for start in interactions.nodes().filter(|n| is_protein(n.id)) {
            let mut visited: HashSet<NodeId> = HashSet::new();
            for first in interactions.out_edges(start.id)? {
                let label = first.display_name().unwrap_or_default();
                let mut pending = vec![first.target];
                while let Some(current) = pending.pop() {
                    if is_protein(current) {
                        let Some(end) = interactions.node(current) else {
                            continue;
                        };
                        let statement =
                            Statement::new(start.term.clone(), first.predicate().clone(), end.term.clone());
                        edges.push(ViewEdge::new(start.term.clone(), end.term.clone(), statement, label));
                        continue;
                    }
                    if !visited.insert(current) {
                        continue;
                    }
                    trace!(from = %start.term, through = %current, "expanding intermediate");
                    pending.extend(interactions.out_edges(current)?.map(|e| e.target));
                }
            }
        }
        debug!(edges = edges.len(), "protein interaction view");
        Ok(edges)
    }

    pub fn protein_view(&self) -> ViewResult<Graph> {
        let interactions = self.interaction_view()?;
        let edges = self.protein_edges(&interactions)?;
        let overrides: NodeOverrides = interactions
            .nodes()
            .map(|n| {
                let presentation = NodeOverride {
                    display_name: n.display_name().map(str::to_string),
                    attributes: n.attributes.clone(),
                };
                (n.term.clone(), presentation)
            })
            .collect();
        Ok(materialize(edges, Some(&overrides)))
    }
}
