//! Typed lookups and the interaction statement shapes.

use crate::error::{QueryError, QueryResult};
use sbolgraph_core::Term;
use sbolgraph_graph::{Graph, TermPattern};
use sbolgraph_vocab::{
    component_role_name, interaction_type_name, participant_role_name, ComponentType,
    ObjectType, Predicate, UNKNOWN,
};
use std::collections::HashSet;

/// Read-only lookups over a statement graph.
///
/// Every lookup documents one statement shape. Optional references return
/// `Option`/`Vec`; required ones return [`QueryError::MissingReference`].
#[derive(Debug, Clone, Copy)]
pub struct SbolQuery<'g> {
    graph: &'g Graph,
}

impl<'g> SbolQuery<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    // ==================== Primitives ====================

    /// `(node, predicate, ?)`, first match.
    pub fn object(&self, node: &Term, predicate: Predicate) -> Option<&'g Term> {
        self.graph.retrieve_node(node, predicate.as_str())
    }

    /// `(node, predicate, ?)`, every match.
    pub fn objects(&self, node: &Term, predicate: Predicate) -> Vec<&'g Term> {
        self.graph.retrieve_nodes(node, &[predicate.as_str()])
    }

    /// `(node, predicate, ?)`, which must exist.
    pub fn require(&self, node: &Term, predicate: Predicate) -> QueryResult<&'g Term> {
        self.object(node, predicate)
            .ok_or_else(|| QueryError::missing_reference(node, predicate.name()))
    }

    /// Subjects of `(?, predicate, ?)`, deduplicated, in edge order.
    fn objects_of_predicate(&self, predicate: Predicate) -> Vec<&'g Term> {
        let mut seen = HashSet::new();
        self.graph
            .search(&TermPattern::Any, &TermPattern::one(predicate.as_str()), &TermPattern::Any)
            .into_iter()
            .map(|hit| hit.object)
            .filter(|object| seen.insert(*object))
            .collect()
    }

    // ==================== Types ====================

    /// `(node, rdf:type, ?)`
    pub fn rdf_type(&self, node: &Term) -> Option<&'g Term> {
        self.object(node, Predicate::RdfType)
    }

    /// The node's SBOL object type; `Unrecognized` when untyped or foreign.
    pub fn object_type(&self, node: &Term) -> ObjectType {
        self.rdf_type(node)
            .and_then(Term::as_iri)
            .map_or(ObjectType::Unrecognized, |iri| ObjectType::from_iri(iri.as_str()))
    }

    pub fn is_a(&self, node: &Term, ty: ObjectType) -> bool {
        self.objects(node, Predicate::RdfType)
            .into_iter()
            .any(|t| ty.iri().is_some_and(|iri| t.is_iri_eq(iri)))
    }

    /// `(?, rdf:type, ty)`, in edge order.
    pub fn instances_of(&self, ty: ObjectType) -> Vec<&'g Term> {
        let Some(iri) = ty.iri() else {
            return Vec::new();
        };
        self.graph
            .search(&TermPattern::Any, &TermPattern::one(Predicate::RdfType.as_str()), &TermPattern::one(iri))
            .into_iter()
            .map(|hit| hit.subject)
            .collect()
    }

    pub fn component_definitions(&self) -> Vec<&'g Term> {
        self.instances_of(ObjectType::ComponentDefinition)
    }

    pub fn module_definitions(&self) -> Vec<&'g Term> {
        self.instances_of(ObjectType::ModuleDefinition)
    }

    pub fn combinatorial_derivations(&self) -> Vec<&'g Term> {
        self.instances_of(ObjectType::CombinatorialDerivation)
    }

    // ==================== Interactions ====================

    /// Every interaction of the design: objects of `(?, interaction, ?)`.
    pub fn interactions(&self) -> Vec<&'g Term> {
        self.objects_of_predicate(Predicate::Interaction)
    }

    /// `(interaction, participation, ?)`
    pub fn participations(&self, interaction: &Term) -> Vec<&'g Term> {
        self.objects(interaction, Predicate::Participation)
    }

    /// `(participation, participant, ?)`, a functional component.
    pub fn participant(&self, participation: &Term) -> QueryResult<&'g Term> {
        self.require(participation, Predicate::Participant)
    }

    /// The component definition a participation refers to, through
    /// `participation -> participant -> definition`.
    pub fn participation_definition(&self, participation: &Term) -> QueryResult<&'g Term> {
        let participant = self.participant(participation)?;
        self.definition(participant)
    }

    /// `(participation, role, ?)`
    pub fn participation_role(&self, participation: &Term) -> Option<&'g Term> {
        self.object(participation, Predicate::Role)
    }

    pub fn participation_role_name(&self, participation: &Term) -> &'static str {
        self.participation_role(participation)
            .map_or(UNKNOWN, |role| participant_role_name(role.lexical()))
    }

    /// `(interaction, type, ?)`
    pub fn interaction_type(&self, interaction: &Term) -> Option<&'g Term> {
        self.object(interaction, Predicate::Type)
    }

    pub fn interaction_type_name(&self, interaction: &Term) -> &'static str {
        self.interaction_type(interaction)
            .map_or(UNKNOWN, |ty| interaction_type_name(ty.lexical()))
    }

    // ==================== Definitions ====================

    /// `(instance, definition, ?)`, which must exist.
    pub fn definition(&self, instance: &Term) -> QueryResult<&'g Term> {
        self.require(instance, Predicate::Definition)
    }

    /// `(cd, type, ?)`, first match.
    pub fn component_type(&self, cd: &Term) -> Option<&'g Term> {
        self.object(cd, Predicate::Type)
    }

    /// `(cd, role, ?)`, first match.
    pub fn component_role(&self, cd: &Term) -> Option<&'g Term> {
        self.object(cd, Predicate::Role)
    }

    /// Readable role of a component definition from its type's role table.
    pub fn role_name(&self, cd: &Term) -> &'static str {
        component_role_name(
            self.component_type(cd).map(Term::lexical),
            self.component_role(cd).map(Term::lexical),
        )
    }

    /// Returns true if any `sbol:type` of the definition is Protein.
    pub fn is_protein(&self, cd: &Term) -> bool {
        self.objects(cd, Predicate::Type)
            .into_iter()
            .any(|ty| ComponentType::from_iri(ty.lexical()) == ComponentType::Protein)
    }

    /// Readable role or type of a role-bearing object.
    ///
    /// `None` for any other kind of object, and when the role or type is
    /// missing from the tables.
    pub fn object_role_name(&self, node: &Term) -> Option<&'static str> {
        let ty = self.object_type(node);
        if !ObjectType::ROLE_BEARING.contains(&ty) {
            return None;
        }
        let name = match ty {
            ObjectType::ComponentDefinition => self.role_name(node),
            ObjectType::Interaction => self.interaction_type_name(node),
            _ => self.participation_role_name(node),
        };
        Some(name).filter(|name| *name != UNKNOWN)
    }
}
