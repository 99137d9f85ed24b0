//! Indexes for efficient graph lookups.

use sbolgraph_core::{EdgeId, NodeId};
use std::collections::{BTreeSet, HashMap};

/// Adjacency index: NodeId -> { outbound: Set<EdgeId>, inbound: Set<EdgeId> },
/// plus the endpoint-pair key every edge is stored under.
///
/// Edge sets are ordered so iteration follows edge creation order.
#[derive(Debug, Default, Clone)]
pub struct AdjacencyIndex {
    /// Edges where the node is the source
    outbound: HashMap<NodeId, BTreeSet<EdgeId>>,
    /// Edges where the node is the target
    inbound: HashMap<NodeId, BTreeSet<EdgeId>>,
    /// Endpoint pair -> edge. Undirected graphs store the pair normalized.
    pairs: HashMap<(NodeId, NodeId), EdgeId>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge_id: EdgeId, key: (NodeId, NodeId), source: NodeId, target: NodeId) {
        self.outbound.entry(source).or_default().insert(edge_id);
        self.inbound.entry(target).or_default().insert(edge_id);
        self.pairs.insert(key, edge_id);
    }

    pub fn remove(&mut self, edge_id: EdgeId, key: (NodeId, NodeId), source: NodeId, target: NodeId) {
        for (index, node_id) in [(&mut self.outbound, source), (&mut self.inbound, target)] {
            if let Some(set) = index.get_mut(&node_id) {
                set.remove(&edge_id);
                if set.is_empty() {
                    index.remove(&node_id);
                }
            }
        }
        if self.pairs.get(&key) == Some(&edge_id) {
            self.pairs.remove(&key);
        }
    }

    /// Get the edge stored under an endpoint pair.
    pub fn edge_for(&self, key: (NodeId, NodeId)) -> Option<EdgeId> {
        self.pairs.get(&key).copied()
    }

    /// Get edges from a node.
    pub fn edges_from(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.outbound
            .get(&node_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Get edges to a node.
    pub fn edges_to(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.inbound
            .get(&node_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Get all edges involving a node, in creation order, self-loops once.
    pub fn edges_involving(&self, node_id: NodeId) -> Vec<EdgeId> {
        let all: BTreeSet<EdgeId> = self
            .edges_from(node_id)
            .chain(self.edges_to(node_id))
            .collect();
        all.into_iter().collect()
    }

    /// Returns true if no edge touches the node.
    pub fn is_isolated(&self, node_id: NodeId) -> bool {
        !self.outbound.contains_key(&node_id) && !self.inbound.contains_key(&node_id)
    }
}
