//! Sequence annotations chained in order of their start coordinate.

use crate::engine::ViewEngine;
use crate::error::ViewResult;
use sbolgraph_graph::{materialize, Graph, NodeOverride, NodeOverrides, ViewEdge};
use sbolgraph_vocab::{Predicate, Restriction};
use tracing::debug;

impl<'g> ViewEngine<'g> {
    /// For every component definition with located annotations:
    /// `cd -> annotation`, `annotation -> location`, and `precedes` edges
    /// between consecutive locations in start order. Locations are named by
    /// the role of what they place and carry their coordinates.
    pub fn sequence_edges(&self) -> ViewResult<(Vec<ViewEdge>, NodeOverrides)> {
        let mut edges = Vec::new();
        let mut overrides = NodeOverrides::new();
        for cd in self.query.component_definitions() {
            let order = self.query.sequence_order(cd)?;
            for entry in &order {
                edges.push(ViewEdge::direct(
                    cd,
                    Predicate::SequenceAnnotation.as_str(),
                    entry.annotation,
                    "sequenceAnnotation",
                ));
                edges.push(ViewEdge::direct(
                    entry.annotation,
                    Predicate::Location.as_str(),
                    entry.location,
                    "location",
                ));
                overrides.insert(
                    entry.location.clone(),
                    NodeOverride::named(entry.role_name)
                        .with_attr("start", entry.start)
                        .with_attr("end", entry.end),
                );
            }
            for pair in order.windows(2) {
                edges.push(ViewEdge::direct(
                    pair[0].location,
                    Restriction::Precedes.as_str(),
                    pair[1].location,
                    "precedes",
                ));
            }
        }
        debug!(edges = edges.len(), "sequence order view");
        Ok((edges, overrides))
    }

    pub fn sequence_view(&self) -> ViewResult<Graph> {
        let (edges, overrides) = self.sequence_edges()?;
        Ok(materialize(edges, Some(&overrides)))
    }
}
