//! Closed enumerations of the identifiers the engine understands.

use crate::error::{VocabError, VocabResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Sentinel returned by every name lookup that does not recognize its input.
pub const UNKNOWN: &str = "Unknown";

/// Declare a vocabulary enum: one variant per known IRI plus `Unrecognized`,
/// with a reverse index built once on first lookup.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($category:literal) {
            $( $variant:ident => ($iri:expr, $label:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $variant, )+
            /// Identifier not present in the vocabulary.
            Unrecognized,
        }

        impl $name {
            /// Every recognized variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The IRI naming this term; `None` for `Unrecognized`.
            pub fn iri(self) -> Option<&'static str> {
                match self {
                    $( $name::$variant => Some($iri), )+
                    $name::Unrecognized => None,
                }
            }

            /// Human-readable name; `"Unknown"` for `Unrecognized`.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Unrecognized => UNKNOWN,
                }
            }

            pub fn is_recognized(self) -> bool {
                !matches!(self, $name::Unrecognized)
            }

            /// Resolve an IRI, falling back to `Unrecognized`.
            pub fn from_iri(iri: &str) -> Self {
                static INDEX: OnceLock<HashMap<&'static str, $name>> = OnceLock::new();
                INDEX
                    .get_or_init(|| {
                        Self::ALL
                            .iter()
                            .filter_map(|term| term.iri().map(|iri| (iri, *term)))
                            .collect()
                    })
                    .get(iri)
                    .copied()
                    .unwrap_or($name::Unrecognized)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = VocabError;

            fn try_from(iri: &str) -> VocabResult<Self> {
                match Self::from_iri(iri) {
                    $name::Unrecognized => Err(VocabError::unknown_term($category, iri)),
                    term => Ok(term),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

vocabulary! {
    /// Statement predicates.
    pub enum Predicate ("predicate") {
        RdfType => ("http://www.w3.org/1999/02/22-rdf-syntax-ns#type", "type"),
        DisplayId => (sbol!("displayId"), "displayId"),
        PersistentIdentity => (sbol!("persistentIdentity"), "persistentIdentity"),
        Version => (sbol!("version"), "version"),
        Title => ("http://purl.org/dc/terms/title", "title"),
        Description => ("http://purl.org/dc/terms/description", "description"),
        Component => (sbol!("component"), "component"),
        FunctionalComponent => (sbol!("functionalComponent"), "functionalComponent"),
        SequenceAnnotation => (sbol!("sequenceAnnotation"), "sequenceAnnotation"),
        SequenceConstraint => (sbol!("sequenceConstraint"), "sequenceConstraint"),
        Location => (sbol!("location"), "location"),
        Sequence => (sbol!("sequence"), "sequence"),
        At => (sbol!("at"), "at"),
        Start => (sbol!("start"), "start"),
        End => (sbol!("end"), "end"),
        Orientation => (sbol!("orientation"), "orientation"),
        Definition => (sbol!("definition"), "definition"),
        Restriction => (sbol!("restriction"), "restriction"),
        Subject => (sbol!("subject"), "subject"),
        Object => (sbol!("object"), "object"),
        Type => (sbol!("type"), "type"),
        Role => (sbol!("role"), "role"),
        Interaction => (sbol!("interaction"), "interaction"),
        Participation => (sbol!("participation"), "participation"),
        Participant => (sbol!("participant"), "participant"),
        Elements => (sbol!("elements"), "elements"),
        Encoding => (sbol!("encoding"), "encoding"),
        Direction => (sbol!("direction"), "direction"),
        Access => (sbol!("access"), "access"),
        Framework => (sbol!("framework"), "framework"),
        Language => (sbol!("language"), "language"),
        Source => (sbol!("source"), "source"),
        Local => (sbol!("local"), "local"),
        Remote => (sbol!("remote"), "remote"),
        Module => (sbol!("module"), "module"),
        MapsTo => (sbol!("mapsTo"), "mapsTo"),
        Model => (sbol!("model"), "model"),
        Template => (sbol!("template"), "template"),
        Strategy => (sbol!("strategy"), "strategy"),
        VariableComponent => (sbol!("variableComponent"), "variableComponent"),
        Variable => (sbol!("variable"), "variable"),
        Operator => (sbol!("operator"), "operator"),
        Variant => (sbol!("variant"), "variant"),
        VariantCollection => (sbol!("variantCollection"), "variantCollection"),
        VariantDerivation => (sbol!("variantDerivation"), "variantDerivation"),
        Member => (sbol!("member"), "member"),
    }
}

impl Predicate {
    /// Predicates whose subject structurally owns its object.
    pub const OWNERSHIP: &'static [Predicate] = &[
        Predicate::Module,
        Predicate::MapsTo,
        Predicate::Interaction,
        Predicate::Participation,
        Predicate::FunctionalComponent,
        Predicate::SequenceConstraint,
        Predicate::Location,
        Predicate::SequenceAnnotation,
        Predicate::VariableComponent,
    ];

    /// Housekeeping predicates removed by a default prune.
    pub const DEFAULT_PRUNE: &'static [Predicate] = &[
        Predicate::Version,
        Predicate::DisplayId,
        Predicate::PersistentIdentity,
        Predicate::Access,
        Predicate::Direction,
        Predicate::Sequence,
        Predicate::Encoding,
        Predicate::Elements,
    ];

    pub fn is_ownership(self) -> bool {
        Self::OWNERSHIP.contains(&self)
    }

    /// The IRI of a predicate that is known to be recognized.
    pub fn as_str(self) -> &'static str {
        self.iri().unwrap_or("")
    }
}

vocabulary! {
    /// Object types, the values of `rdf:type`.
    pub enum ObjectType ("object type") {
        ComponentDefinition => (sbol!("ComponentDefinition"), "ComponentDefinition"),
        Component => (sbol!("Component"), "Component"),
        ModuleDefinition => (sbol!("ModuleDefinition"), "ModuleDefinition"),
        Module => (sbol!("Module"), "Module"),
        FunctionalComponent => (sbol!("FunctionalComponent"), "FunctionalComponent"),
        Interaction => (sbol!("Interaction"), "Interaction"),
        Participation => (sbol!("Participation"), "Participation"),
        SequenceAnnotation => (sbol!("SequenceAnnotation"), "SequenceAnnotation"),
        SequenceConstraint => (sbol!("SequenceConstraint"), "SequenceConstraint"),
        Range => (sbol!("Range"), "Range"),
        Cut => (sbol!("Cut"), "Cut"),
        GenericLocation => (sbol!("GenericLocation"), "GenericLocation"),
        Sequence => (sbol!("Sequence"), "Sequence"),
        CombinatorialDerivation => (sbol!("CombinatorialDerivation"), "CombinatorialDerivation"),
        VariableComponent => (sbol!("VariableComponent"), "VariableComponent"),
        Collection => (sbol!("Collection"), "Collection"),
        MapsTo => (sbol!("MapsTo"), "MapsTo"),
        Model => (sbol!("Model"), "Model"),
        Attachment => (sbol!("Attachment"), "Attachment"),
        Implementation => (sbol!("Implementation"), "Implementation"),
        Experiment => (sbol!("Experiment"), "Experiment"),
        ExperimentalData => (sbol!("ExperimentalData"), "ExperimentalData"),
        GenericTopLevel => (sbol!("GenericTopLevel"), "GenericTopLevel"),
    }
}

impl ObjectType {
    /// Object types removed by a default prune.
    pub const DEFAULT_PRUNE: &'static [ObjectType] = &[ObjectType::Sequence];

    /// Object types whose role or type can be translated to a readable name.
    pub const ROLE_BEARING: &'static [ObjectType] = &[
        ObjectType::ComponentDefinition,
        ObjectType::Participation,
        ObjectType::Interaction,
    ];

    pub fn as_str(self) -> &'static str {
        self.iri().unwrap_or("")
    }
}

vocabulary! {
    /// Molecular types of a ComponentDefinition (`sbol:type` values).
    pub enum ComponentType ("component type") {
        Dna => (biopax!("Dna"), "DNA"),
        DnaRegion => (biopax!("DnaRegion"), "DNA"),
        Rna => (biopax!("Rna"), "RNA"),
        RnaRegion => (biopax!("RnaRegion"), "RNA"),
        Protein => (biopax!("Protein"), "Protein"),
        SmallMolecule => (biopax!("SmallMolecule"), "Small Molecule"),
        Complex => (biopax!("Complex"), "Complex"),
    }
}

vocabulary! {
    /// Roles of a ComponentDefinition (`sbol:role` values).
    pub enum ComponentRole ("component role") {
        Promoter => (so!("0000167"), "Promoter"),
        Rbs => (so!("0000139"), "RBS"),
        Cds => (so!("0000316"), "CDS"),
        Terminator => (so!("0000141"), "Terminator"),
        Gene => (so!("0000704"), "Gene"),
        Operator => (so!("0000057"), "Operator"),
        EngineeredGene => (so!("0000280"), "Engineered Gene"),
        Mrna => (so!("0000234"), "mRNA"),
        EngineeredRegion => (so!("0000804"), "Engineered Region"),
        NonCovalentBindingSite => (so!("0001091"), "Non-Covalent Binding Site"),
        StartCodon => (so!("0000318"), "Start Codon"),
        Tag => (so!("0000324"), "Tag"),
        EngineeredTag => (so!("0000807"), "Engineered Tag"),
        SgRna => (so!("0001998"), "sgRNA"),
        TranscriptionFactor => ("http://identifiers.org/go/GO:0003700", "Transcriptional Factor"),
        Effector => ("http://identifiers.org/chebi/CHEBI:35224", "Effector"),
    }
}

vocabulary! {
    /// Interaction types (`sbol:type` values of an Interaction).
    pub enum InteractionType ("interaction type") {
        Inhibition => (sbo!("0000169"), "Inhibition"),
        Stimulation => (sbo!("0000170"), "Stimulation"),
        BiochemicalReaction => (sbo!("0000176"), "Biochemical reaction"),
        NoncovalentBonding => (sbo!("0000177"), "Noncovalent bonding"),
        Degradation => (sbo!("0000179"), "Degradation"),
        GeneticProduction => (sbo!("0000589"), "Genetic production"),
        Control => (sbo!("0000168"), "Control"),
    }
}

vocabulary! {
    /// Participant roles (`sbol:role` values of a Participation).
    pub enum ParticipantRole ("participant role") {
        Inhibitor => (sbo!("0000020"), "Inhibitor"),
        Inhibited => (sbo!("0000642"), "Inhibited"),
        Stimulator => (sbo!("0000459"), "Stimulator"),
        Stimulated => (sbo!("0000643"), "Stimulated"),
        Modifier => (sbo!("0000019"), "Modifier"),
        Modified => (sbo!("0000644"), "Modified"),
        Product => (sbo!("0000011"), "Product"),
        Reactant => (sbo!("0000010"), "Reactant"),
        Promoter => (sbo!("0000598"), "Promoter"),
        Template => (sbo!("0000645"), "Template"),
    }
}

vocabulary! {
    /// Sequence constraint restrictions.
    pub enum Restriction ("restriction") {
        Precedes => (sbol!("precedes"), "precedes"),
        SameOrientationAs => (sbol!("sameOrientationAs"), "sameOrientationAs"),
        OppositeOrientationAs => (sbol!("oppositeOrientationAs"), "oppositeOrientationAs"),
        DifferentFrom => (sbol!("differentFrom"), "differentFrom"),
    }
}

impl Restriction {
    pub fn as_str(self) -> &'static str {
        self.iri().unwrap_or("")
    }
}

/// Which side of a directed interaction a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ParticipantRole {
    /// Role to direction table; `None` for `Unrecognized`.
    pub fn direction(self) -> Option<Direction> {
        use ParticipantRole::*;
        match self {
            Inhibitor | Stimulator | Modifier | Reactant | Promoter | Template => {
                Some(Direction::In)
            }
            Inhibited | Stimulated | Modified | Product => Some(Direction::Out),
            Unrecognized => None,
        }
    }
}
