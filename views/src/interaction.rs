//! Component definitions joined by the interactions between them.

use crate::engine::ViewEngine;
use crate::error::ViewResult;
use sbolgraph_core::{Iri, Statement, Term};
use sbolgraph_graph::{materialize, Graph, ViewEdge};
use sbolgraph_vocab::{role_direction, Direction, Predicate};
use tracing::debug;

impl<'g> ViewEngine<'g> {
    /// Edges between the definitions taking part in each interaction.
    ///
    /// A single participation gives a self-loop. Otherwise every unordered
    /// pair of participations is looked at once: the participant roles map
    /// to directions (unmapped roles default to `in` for the earlier
    /// participation and `out` for the later one), and a pair with one `in`
    /// and one `out` gives an edge from the `in` definition to the `out`
    /// one. Every edge is labeled with the interaction's type name.
    pub fn interaction_edges(&self) -> ViewResult<Vec<ViewEdge>> {
        let mut edges = Vec::new();
        for interaction in self.query.interactions() {
            let label = self.query.interaction_type_name(interaction);
            let predicate = self
                .query
                .interaction_type(interaction)
                .and_then(Term::as_iri)
                .cloned()
                .unwrap_or_else(|| Iri::new(Predicate::Type.as_str()));
            let participations = self.query.participations(interaction);

            if let [only] = participations.as_slice() {
                let cd = self.query.participation_definition(only)?;
                edges.push(interaction_edge(cd, &predicate, cd, label));
                continue;
            }

            let mut sides = Vec::with_capacity(participations.len());
            for participation in &participations {
                let cd = self.query.participation_definition(participation)?;
                let direction = self
                    .query
                    .participation_role(participation)
                    .and_then(|role| role_direction(role.lexical()));
                sides.push((cd, direction));
            }

            for i in 0..sides.len() {
                for j in (i + 1)..sides.len() {
                    let (first, first_dir) = sides[i];
                    let (second, second_dir) = sides[j];
                    let first_dir = first_dir.unwrap_or(Direction::In);
                    let second_dir = second_dir.unwrap_or(Direction::Out);
                    match (first_dir, second_dir) {
                        (Direction::In, Direction::Out) => {
                            edges.push(interaction_edge(first, &predicate, second, label))
                        }
                        (Direction::Out, Direction::In) => {
                            edges.push(interaction_edge(second, &predicate, first, label))
                        }
                        // Same side on both ends is not a directed relation
                        _ => {}
                    }
                }
            }
        }
        debug!(edges = edges.len(), "interaction view");
        Ok(edges)
    }

    pub fn interaction_view(&self) -> ViewResult<Graph> {
        let edges = self.interaction_edges()?;
        let overrides = self.role_overrides(&edges);
        Ok(materialize(edges, Some(&overrides)))
    }
}

fn interaction_edge(input: &Term, predicate: &Iri, output: &Term, label: &str) -> ViewEdge {
    let statement = Statement::new(input.clone(), predicate.clone(), output.clone());
    ViewEdge::new(input.clone(), output.clone(), statement, label)
}
