//! The statement store: one loaded design, pruned and labeled once.

use crate::config::StoreConfig;
use crate::graph::Graph;
use crate::pattern::TermPattern;
use crate::prune::{PruneConfig, PruneStats};
use crate::search::SearchHit;
use sbolgraph_core::{Statement, Term};
use tracing::info;

/// Owns the graph built from a design's statements.
///
/// Views read it through [`StatementStore::graph`] and never write back.
/// [`StatementStore::prune`] is the only mutation.
#[derive(Debug, Clone)]
pub struct StatementStore {
    graph: Graph,
    config: StoreConfig,
    pruned: bool,
}

impl StatementStore {
    /// Build a store with the default config (directed, not pruned).
    pub fn new(statements: impl IntoIterator<Item = Statement>) -> Self {
        Self::with_config(statements, StoreConfig::default())
    }

    /// Build a store, prune it if configured, and label it.
    pub fn with_config(statements: impl IntoIterator<Item = Statement>, config: StoreConfig) -> Self {
        let graph = Graph::from_statements(config.kind, statements);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built statement store"
        );
        let mut store = Self {
            graph,
            config,
            pruned: false,
        };
        if store.config.prune_on_load {
            store.prune();
        }
        store.graph.label();
        store
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Whether a prune has run on this store.
    pub fn is_pruned(&self) -> bool {
        self.pruned
    }

    /// Prune in place with the configured blacklists.
    ///
    /// Destructive: view results differ before and after, so call this once,
    /// before extracting any view.
    pub fn prune(&mut self) -> PruneStats {
        let config = self.config.prune.clone();
        self.prune_with(&config)
    }

    /// Prune in place with explicit blacklists.
    pub fn prune_with(&mut self, config: &PruneConfig) -> PruneStats {
        let stats = self.graph.prune(config);
        self.pruned = true;
        self.graph.label();
        stats
    }

    /// See [`Graph::search`].
    pub fn search(
        &self,
        subject: &TermPattern,
        predicate: &TermPattern,
        object: &TermPattern,
    ) -> Vec<SearchHit<'_>> {
        self.graph.search(subject, predicate, object)
    }

    /// See [`Graph::retrieve_node`].
    pub fn retrieve_node(&self, node: &Term, predicate: &str) -> Option<&Term> {
        self.graph.retrieve_node(node, predicate)
    }

    /// See [`Graph::retrieve_nodes`].
    pub fn retrieve_nodes(&self, node: &Term, predicates: &[&str]) -> Vec<&Term> {
        self.graph.retrieve_nodes(node, predicates)
    }
}
