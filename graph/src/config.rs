//! Configuration for building a statement store.

use crate::graph::GraphKind;
use crate::prune::PruneConfig;
use serde::{Deserialize, Serialize};

/// Configuration for [`StatementStore`](crate::StatementStore) construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directed or undirected storage
    pub kind: GraphKind,
    /// Run a prune once while loading
    pub prune_on_load: bool,
    /// Blacklists used by every prune of this store
    pub prune: PruneConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: GraphKind::Directed,
            prune_on_load: false,
            prune: PruneConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directed, pruned on load with the default blacklists.
    pub fn pruned() -> Self {
        Self::default().with_prune_on_load(true)
    }

    pub fn with_kind(mut self, kind: GraphKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_prune_on_load(mut self, prune: bool) -> Self {
        self.prune_on_load = prune;
        self
    }

    pub fn with_prune_config(mut self, prune: PruneConfig) -> Self {
        self.prune = prune;
        self
    }

    /// Read a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
