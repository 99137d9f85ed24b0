//! View selection and the shared engine state.

use crate::error::{ViewError, ViewResult};
use sbolgraph_core::Term;
use sbolgraph_graph::{Graph, NodeOverride, NodeOverrides, StatementStore, ViewEdge};
use sbolgraph_query::SbolQuery;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Every view the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// An independent copy of the whole statement graph.
    Full,
    /// Component definitions to the definitions of their sub-components.
    Components,
    /// Components and functional components of every definition.
    Parts,
    /// Component definitions joined by the interactions between them.
    Interaction,
    /// Proteins joined directly or through intermediates of the interaction view.
    ProteinProteinInteraction,
    /// Ownership hierarchy.
    Parent,
    /// Module definitions to the definitions they use.
    Functional,
    /// Variable components of combinatorial derivations.
    CombinatorialDerivation,
    /// Sequence annotations chained by start coordinate.
    SequenceOrder,
}

impl ViewKind {
    pub const ALL: &'static [ViewKind] = &[
        ViewKind::Full,
        ViewKind::Components,
        ViewKind::Parts,
        ViewKind::Interaction,
        ViewKind::ProteinProteinInteraction,
        ViewKind::Parent,
        ViewKind::Functional,
        ViewKind::CombinatorialDerivation,
        ViewKind::SequenceOrder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Full => "full",
            ViewKind::Components => "components",
            ViewKind::Parts => "parts",
            ViewKind::Interaction => "interaction",
            ViewKind::ProteinProteinInteraction => "ppi",
            ViewKind::Parent => "parent",
            ViewKind::Functional => "functional",
            ViewKind::CombinatorialDerivation => "derivation",
            ViewKind::SequenceOrder => "sequence",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewKind {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ViewError::unknown_view(s))
    }
}

/// Produces views over one statement graph.
///
/// Holds only shared references, so any number of engines may read the
/// same store at once.
#[derive(Debug, Clone, Copy)]
pub struct ViewEngine<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) query: SbolQuery<'g>,
}

impl<'g> ViewEngine<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            query: SbolQuery::new(graph),
        }
    }

    pub fn from_store(store: &'g StatementStore) -> Self {
        Self::new(store.graph())
    }

    pub fn query(&self) -> &SbolQuery<'g> {
        &self.query
    }

    /// Build the requested view as a fresh graph.
    pub fn produce(&self, kind: ViewKind) -> ViewResult<Graph> {
        let view = match kind {
            ViewKind::Full => self.full_view(),
            ViewKind::Components => self.components_view()?,
            ViewKind::Parts => self.parts_view()?,
            ViewKind::Interaction => self.interaction_view()?,
            ViewKind::ProteinProteinInteraction => self.protein_view()?,
            ViewKind::Parent => self.parent_view(),
            ViewKind::Functional => self.functional_view()?,
            ViewKind::CombinatorialDerivation => self.derivation_view()?,
            ViewKind::SequenceOrder => self.sequence_view()?,
        };
        debug!(view = %kind, nodes = view.node_count(), edges = view.edge_count(), "produced view");
        Ok(view)
    }

    /// An independent copy of the statement graph.
    pub fn full_view(&self) -> Graph {
        self.graph.clone()
    }

    /// A `role` attribute for every edge endpoint that has a readable role.
    pub(crate) fn role_overrides(&self, edges: &[ViewEdge]) -> NodeOverrides {
        let mut overrides = NodeOverrides::new();
        for term in edges.iter().flat_map(|e| [&e.source, &e.target]) {
            if overrides.contains_key(term) {
                continue;
            }
            if let Some(role) = self.query.object_role_name(term) {
                overrides.insert(term.clone(), NodeOverride::default().with_attr("role", role));
            }
        }
        overrides
    }

    /// Returns true if the term is a component definition of type Protein.
    pub(crate) fn is_protein(&self, term: &Term) -> bool {
        self.query.is_protein(term)
    }
}
