//! Building a fresh graph from a list of view edges.

use crate::graph::{Graph, GraphKind};
use crate::label::node_label;
use sbolgraph_core::{Attributes, Statement, Term};
use std::collections::HashMap;
use tracing::debug;

/// One edge produced by a view, before it is placed in a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEdge {
    pub source: Term,
    pub target: Term,
    /// The statement this edge stands for.
    pub statement: Statement,
    pub display_name: String,
    pub weight: u32,
}

impl ViewEdge {
    /// A weight-1 edge.
    pub fn new(source: Term, target: Term, statement: Statement, display_name: impl Into<String>) -> Self {
        Self {
            source,
            target,
            statement,
            display_name: display_name.into(),
            weight: 1,
        }
    }

    /// A weight-1 edge standing for `source predicate target` itself.
    pub fn direct(source: &Term, predicate: &str, target: &Term, display_name: impl Into<String>) -> Self {
        let statement = Statement::new(source.clone(), predicate, target.clone());
        Self::new(source.clone(), target.clone(), statement, display_name)
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }
}

/// Per-node presentation supplied by a view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeOverride {
    pub display_name: Option<String>,
    pub attributes: Attributes,
}

impl NodeOverride {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<sbolgraph_core::Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }
}

pub type NodeOverrides = HashMap<Term, NodeOverride>;

/// Build a directed graph from view edges.
///
/// Edges joining the same pair collapse: weights add up and the first
/// display name wins. Node names come from `overrides` when given, else
/// from the usual node labeling.
pub fn materialize(
    edges: impl IntoIterator<Item = ViewEdge>,
    overrides: Option<&NodeOverrides>,
) -> Graph {
    let mut graph = Graph::with_kind(GraphKind::Directed);
    for edge in edges {
        graph.add_edge(
            edge.source,
            edge.target,
            edge.statement,
            Some(edge.display_name),
            edge.weight,
        );
    }

    let nodes: Vec<_> = graph.nodes().map(|n| (n.id, n.term.clone())).collect();
    for (id, term) in nodes {
        let presentation = overrides.and_then(|o| o.get(&term));
        let name = presentation
            .and_then(|p| p.display_name.clone())
            .unwrap_or_else(|| node_label(&term));
        // Ids come from the graph just built, so these cannot miss.
        let _ = graph.set_display_name(id, name);
        if let Some(presentation) = presentation {
            for (attr, value) in &presentation.attributes {
                let _ = graph.set_node_attr(id, attr, value.clone());
            }
        }
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "materialized view"
    );
    graph
}
