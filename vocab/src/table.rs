//! Name translation over the vocabulary tables.
//!
//! All functions here take raw IRI text and never fail: anything the
//! vocabulary does not recognize resolves to [`UNKNOWN`] (or `None` where
//! the caller needs to try another translator next).

use crate::terms::{
    ComponentRole, ComponentType, Direction, InteractionType, ObjectType, ParticipantRole,
    Predicate, UNKNOWN,
};

const DNA_ROLES: &[(ComponentRole, &str)] = &[
    (ComponentRole::Promoter, "Promoter"),
    (ComponentRole::Rbs, "RBS"),
    (ComponentRole::Cds, "CDS"),
    (ComponentRole::Terminator, "Terminator"),
    (ComponentRole::EngineeredRegion, "Engineered Region"),
    (ComponentRole::Operator, "Operator"),
    (ComponentRole::Gene, "Gene"),
];

const RNA_ROLES: &[(ComponentRole, &str)] = &[
    (ComponentRole::Mrna, "mRNA"),
    (ComponentRole::SgRna, "sgRNA"),
    (ComponentRole::Cds, "CDS RNA"),
];

const PROTEIN_ROLES: &[(ComponentRole, &str)] =
    &[(ComponentRole::TranscriptionFactor, "Transcriptional Factor")];

const SMALL_MOLECULE_ROLES: &[(ComponentRole, &str)] = &[(ComponentRole::Effector, "Effector")];

const COMPLEX_ROLES: &[(ComponentRole, &str)] = &[];

impl ComponentType {
    /// The role table for this molecular type.
    pub fn roles(self) -> &'static [(ComponentRole, &'static str)] {
        match self {
            ComponentType::Dna | ComponentType::DnaRegion => DNA_ROLES,
            ComponentType::Rna | ComponentType::RnaRegion => RNA_ROLES,
            ComponentType::Protein => PROTEIN_ROLES,
            ComponentType::SmallMolecule => SMALL_MOLECULE_ROLES,
            ComponentType::Complex => COMPLEX_ROLES,
            ComponentType::Unrecognized => &[],
        }
    }

    /// Name of `role` within this type's table, else the type's own name.
    pub fn role_name(self, role: ComponentRole) -> &'static str {
        self.roles()
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, name)| *name)
            .unwrap_or_else(|| self.name())
    }

    /// The first type (in table order) whose role table contains `role`.
    pub fn from_role(role: ComponentRole) -> Option<ComponentType> {
        [
            ComponentType::Dna,
            ComponentType::Rna,
            ComponentType::Protein,
            ComponentType::SmallMolecule,
            ComponentType::Complex,
        ]
        .into_iter()
        .find(|t| t.roles().iter().any(|(r, _)| *r == role))
    }
}

/// Readable name of a component type IRI, e.g. `"Protein"`.
pub fn type_name(iri: &str) -> &'static str {
    ComponentType::from_iri(iri).name()
}

/// Readable name of an interaction type IRI, e.g. `"Inhibition"`.
pub fn interaction_type_name(iri: &str) -> &'static str {
    InteractionType::from_iri(iri).name()
}

/// Readable name of a participant role IRI, e.g. `"Reactant"`.
pub fn participant_role_name(iri: &str) -> &'static str {
    ParticipantRole::from_iri(iri).name()
}

/// Readable name for a ComponentDefinition given its type and role.
///
/// A role found in the type's table wins; otherwise the type name is used,
/// and an unrecognized or absent type gives `"Unknown"`.
pub fn component_role_name(type_iri: Option<&str>, role_iri: Option<&str>) -> &'static str {
    let ty = type_iri.map_or(ComponentType::Unrecognized, ComponentType::from_iri);
    let role = role_iri.map_or(ComponentRole::Unrecognized, ComponentRole::from_iri);
    ty.role_name(role)
}

/// The component type whose role table contains `role_iri`.
pub fn type_from_role(role_iri: &str) -> Option<ComponentType> {
    ComponentType::from_role(ComponentRole::from_iri(role_iri))
}

/// Translate any role-like IRI to a readable name.
///
/// Tries, in order: component role (via the type owning that role),
/// interaction type, participant role. Returns `None` when all three miss.
pub fn translate_role(iri: &str) -> Option<&'static str> {
    let component = type_from_role(iri)
        .map(|ty| ty.role_name(ComponentRole::from_iri(iri)))
        .unwrap_or(UNKNOWN);
    [
        component,
        interaction_type_name(iri),
        participant_role_name(iri),
    ]
    .into_iter()
    .find(|name| *name != UNKNOWN)
}

/// Direction a participant role maps to, if the role is in the table.
pub fn role_direction(iri: &str) -> Option<Direction> {
    ParticipantRole::from_iri(iri).direction()
}

/// IRIs of the nodes removed by a default prune.
pub fn default_prune_nodes() -> Vec<String> {
    ObjectType::DEFAULT_PRUNE
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

/// IRIs of the predicates removed by a default prune.
pub fn default_prune_predicates() -> Vec<String> {
    Predicate::DEFAULT_PRUNE
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}
