//! Turning a view into a tree by duplicating shared nodes.

use crate::engine::{ViewEngine, ViewKind};
use crate::error::ViewResult;
use sbolgraph_core::{Statement, Term};
use sbolgraph_graph::{derive_name, materialize, Graph, NodeOverride, NodeOverrides, ViewEdge};
use std::collections::HashSet;
use tracing::debug;

/// Copy `graph` so that no node is the target of more than one edge.
///
/// The first edge into a node keeps it. Every later edge into the same
/// node points at a duplicate named `<source>/<target name>/1` instead,
/// carrying the original's display name and attributes. A name already
/// taken gets a `_2`, `_3`, ... suffix on the target name.
pub fn into_tree(graph: &Graph) -> Graph {
    let mut overrides: NodeOverrides = graph
        .nodes()
        .map(|n| (n.term.clone(), presentation(n)))
        .collect();
    let mut taken: HashSet<Term> = graph.nodes().map(|n| n.term.clone()).collect();
    let mut reached: HashSet<&Term> = HashSet::new();
    let mut edges = Vec::with_capacity(graph.edge_count());
    let mut duplicates = 0usize;

    for edge in graph.edges() {
        let (Some(source), Some(target)) = (graph.node(edge.source), graph.node(edge.target)) else {
            continue;
        };
        let label = edge.display_name().unwrap_or_default();
        if reached.insert(&target.term) {
            edges.push(
                ViewEdge::new(source.term.clone(), target.term.clone(), edge.first_statement().clone(), label)
                    .with_weight(edge.weight),
            );
            continue;
        }

        let copy = duplicate_term(&source.term, &target.term, &mut taken);
        overrides.insert(copy.clone(), presentation(target));
        let statement = Statement::new(source.term.clone(), edge.predicate().clone(), copy.clone());
        edges.push(ViewEdge::new(source.term.clone(), copy, statement, label).with_weight(edge.weight));
        duplicates += 1;
    }
    debug!(duplicates, "converted view to tree");
    materialize(edges, Some(&overrides))
}

/// First unused `<source>/<target name>/1`, numbering the name on collision.
fn duplicate_term(source: &Term, target: &Term, taken: &mut HashSet<Term>) -> Term {
    let lexical = source.lexical();
    let stem = lexical.strip_suffix("/1").unwrap_or(lexical);
    let name = derive_name(target.lexical());
    let mut copy = Term::iri(format!("{stem}/{name}/1"));
    let mut n = 2usize;
    while taken.contains(&copy) {
        copy = Term::iri(format!("{stem}/{name}_{n}/1"));
        n += 1;
    }
    taken.insert(copy.clone());
    copy
}

fn presentation(node: &sbolgraph_graph::Node) -> NodeOverride {
    NodeOverride {
        display_name: node.display_name().map(str::to_string),
        attributes: node.attributes.clone(),
    }
}

impl<'g> ViewEngine<'g> {
    /// The requested view, converted with [`into_tree`].
    pub fn tree_view(&self, kind: ViewKind) -> ViewResult<Graph> {
        let view = self.produce(kind)?;
        Ok(into_tree(&view))
    }
}
