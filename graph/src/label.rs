//! Display-name derivation.

use crate::graph::Graph;
use sbolgraph_core::Term;
use tracing::debug;

/// Short name of an IRI: the last segment after splitting on `#`, `/` and
/// `:`, or the second-to-last when the last is a single digit (a version).
///
/// `"http://ex.org/Foo/1"` and `"http://ex.org/Foo"` both give `"Foo"`.
pub fn derive_name(iri: &str) -> &str {
    let segments: Vec<&str> = iri.split(['#', '/', ':']).collect();
    let last = segments.len() - 1;
    let is_version = segments[last].len() == 1
        && segments[last].chars().all(|c| c.is_ascii_digit());
    if is_version && last > 0 {
        segments[last - 1]
    } else {
        segments[last]
    }
}

/// Display name for a node term.
///
/// IRIs try a vocabulary role translation first, then the short name.
/// Literals use their lexical form and blank nodes their label.
pub fn node_label(term: &Term) -> String {
    match term {
        Term::Iri(iri) => sbolgraph_vocab::translate_role(iri.as_str())
            .unwrap_or_else(|| derive_name(iri.as_str()))
            .to_string(),
        Term::Literal(lit) => lit.lexical().to_string(),
        Term::Blank(id) => id.clone(),
    }
}

impl Graph {
    /// Give every unlabeled node a display name, and name every unlabeled
    /// edge after its first statement's predicate. Existing names are kept.
    pub fn label(&mut self) {
        let pending: Vec<_> = self
            .nodes()
            .filter(|n| n.display_name().is_none())
            .map(|n| (n.id, node_label(&n.term)))
            .collect();
        let labeled = pending.len();
        for (id, name) in pending {
            // Ids come from the live node set, so this cannot miss.
            let _ = self.set_display_name(id, name);
        }

        let edge_ids: Vec<_> = self.edge_ids().collect();
        for id in edge_ids {
            if let Some(edge) = self.edge_mut(id).filter(|e| e.display_name().is_none()) {
                let name = derive_name(edge.predicate().as_str()).to_string();
                edge.set_display_name(name);
            }
        }
        debug!(nodes = labeled, edges = self.edge_count(), "labeled graph");
    }
}
