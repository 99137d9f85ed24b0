//! Structural measures over a graph.

use crate::graph::{Graph, GraphKind};
use sbolgraph_core::{GraphError, GraphResult, NodeId};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

impl Graph {
    /// Number of edge endpoints at a node; a self-loop counts twice.
    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        if self.node(id).is_none() {
            return Err(GraphError::NodeNotFound(id));
        }
        Ok(self
            .incident_edges(id)
            .map(|e| if e.source == e.target { 2 } else { 1 })
            .sum())
    }

    /// Degree of every node, in node order.
    pub fn degrees(&self) -> BTreeMap<NodeId, usize> {
        self.nodes()
            .map(|n| {
                let degree = self
                    .incident_edges(n.id)
                    .map(|e| if e.source == e.target { 2 } else { 1 })
                    .sum();
                (n.id, degree)
            })
            .collect()
    }

    /// Edges present over edges possible; 0 for fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.node_count() as f64;
        if n <= 1.0 {
            return 0.0;
        }
        let m = self.edge_count() as f64;
        match self.kind() {
            GraphKind::Directed => m / (n * (n - 1.0)),
            GraphKind::Undirected => 2.0 * m / (n * (n - 1.0)),
        }
    }

    /// Every node reachable from `id` ignoring edge direction, `id` included.
    pub fn connected_component(&self, id: NodeId) -> GraphResult<BTreeSet<NodeId>> {
        if self.node(id).is_none() {
            return Err(GraphError::NodeNotFound(id));
        }
        let mut seen = BTreeSet::from([id]);
        let mut queue = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        Ok(seen)
    }

    /// Shortest path length from every node to every node it reaches,
    /// following edge direction. Each node reaches itself at distance 0.
    pub fn path_lengths(&self) -> BTreeMap<NodeId, HashMap<NodeId, usize>> {
        self.node_ids()
            .map(|start| (start, self.bfs_distances(start)))
            .collect()
    }

    fn bfs_distances(&self, start: NodeId) -> HashMap<NodeId, usize> {
        let mut dist = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            let d = dist[&current];
            for next in self.successors(current) {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }

    /// How many reachable ordered pairs lie at each distance (distance 0 excluded).
    pub fn path_length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for distances in self.path_lengths().values() {
            for &d in distances.values().filter(|d| **d > 0) {
                *histogram.entry(d).or_insert(0) += 1;
            }
        }
        histogram
    }

    /// Mean length over reachable ordered pairs of distinct nodes, or `None`
    /// when no node reaches another.
    pub fn average_shortest_path(&self) -> Option<f64> {
        let histogram = self.path_length_histogram();
        let pairs: usize = histogram.values().sum();
        if pairs == 0 {
            return None;
        }
        let total: usize = histogram.iter().map(|(d, count)| d * count).sum();
        Some(total as f64 / pairs as f64)
    }
}
