//! Destructive graph simplification.

use crate::graph::Graph;
use crate::label::derive_name;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// Node and predicate blacklists for [`Graph::prune`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
    /// IRIs of nodes to remove outright.
    pub nodes: Vec<String>,
    /// Predicate IRIs whose statements are removed.
    pub predicates: Vec<String>,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            nodes: sbolgraph_vocab::default_prune_nodes(),
            predicates: sbolgraph_vocab::default_prune_predicates(),
        }
    }
}

impl PruneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blacklists that remove nothing.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            predicates: Vec::new(),
        }
    }

    pub fn with_node(mut self, iri: impl Into<String>) -> Self {
        self.nodes.push(iri.into());
        self
    }

    pub fn with_predicate(mut self, iri: impl Into<String>) -> Self {
        self.predicates.push(iri.into());
        self
    }
}

/// What a prune removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    pub nodes_removed: usize,
    pub edges_removed: usize,
    pub statements_removed: usize,
}

impl PruneStats {
    pub fn is_noop(&self) -> bool {
        *self == PruneStats::default()
    }
}

impl Graph {
    /// Remove blacklisted nodes and blacklisted-predicate statements, then
    /// remove isolated nodes until none remain.
    ///
    /// This mutates the graph in place. Running it twice with the same
    /// config is a no-op the second time.
    pub fn prune(&mut self, config: &PruneConfig) -> PruneStats {
        let mut stats = PruneStats::default();
        let node_blacklist: HashSet<&str> = config.nodes.iter().map(String::as_str).collect();
        let predicate_blacklist: HashSet<&str> =
            config.predicates.iter().map(String::as_str).collect();

        // Blacklisted nodes, with every edge touching them
        let doomed: Vec<_> = self
            .nodes()
            .filter(|n| n.term.as_iri().is_some_and(|iri| node_blacklist.contains(iri.as_str())))
            .map(|n| n.id)
            .collect();
        for id in doomed {
            let edges = self.incident_edges(id).count();
            if self.remove_node(id).is_ok() {
                stats.nodes_removed += 1;
                stats.edges_removed += edges;
            }
        }

        // Blacklisted statements; an edge goes once it has none left
        let edge_ids: Vec<_> = self.edge_ids().collect();
        for id in edge_ids {
            let Some(edge) = self.edge_mut(id) else {
                continue;
            };
            let first_before = edge.predicate().clone();
            let dropped = edge.retain_statements(|s| !predicate_blacklist.contains(s.predicate().as_str()));
            if dropped == 0 {
                continue;
            }
            stats.statements_removed += dropped;
            if edge.statements().is_empty() {
                if self.remove_edge(id).is_ok() {
                    stats.edges_removed += 1;
                }
                continue;
            }
            edge.weight = edge.weight.saturating_sub(dropped as u32).max(1);
            if edge.predicate() != &first_before && edge.display_name().is_some() {
                let name = derive_name(edge.predicate().as_str()).to_string();
                edge.set_display_name(name);
            }
        }

        // Isolated nodes, to a fixed point
        loop {
            let isolated: Vec<_> = self.node_ids().filter(|id| self.is_isolated(*id)).collect();
            if isolated.is_empty() {
                break;
            }
            for id in isolated {
                if self.remove_node(id).is_ok() {
                    stats.nodes_removed += 1;
                }
            }
        }

        info!(
            nodes_removed = stats.nodes_removed,
            edges_removed = stats.edges_removed,
            statements_removed = stats.statements_removed,
            "pruned graph"
        );
        stats
    }
}
