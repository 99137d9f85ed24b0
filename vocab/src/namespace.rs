//! Namespaces and prefix expansion.

/// Build an IRI in the SBOL 2 namespace at compile time.
macro_rules! sbol {
    ($local:literal) => {
        concat!("http://sbols.org/v2#", $local)
    };
}

/// Build an IRI in the Sequence Ontology namespace at compile time.
macro_rules! so {
    ($local:literal) => {
        concat!("http://identifiers.org/so/SO:", $local)
    };
}

/// Build an IRI in the Systems Biology Ontology namespace at compile time.
macro_rules! sbo {
    ($local:literal) => {
        concat!("http://identifiers.org/biomodels.sbo/SBO:", $local)
    };
}

/// Build an IRI in the BioPAX level 3 namespace at compile time.
macro_rules! biopax {
    ($local:literal) => {
        concat!("http://www.biopax.org/release/biopax-level3.owl#", $local)
    };
}

pub const SBOL: &str = sbol!("");
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const SEQUENCE_ONTOLOGY: &str = so!("");
pub const SBO: &str = sbo!("");
pub const BIOPAX: &str = biopax!("");
pub const DCTERMS: &str = "http://purl.org/dc/terms/";
pub const PROV: &str = "http://www.w3.org/ns/prov#";
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const CHEBI: &str = "http://identifiers.org/chebi/CHEBI:";
pub const GENE_ONTOLOGY: &str = "http://identifiers.org/go/GO:";

/// Prefixes understood by textual search patterns.
pub const PREFIXES: &[(&str, &str)] = &[
    ("sbol", SBOL),
    ("rdf", RDF),
    ("so", SEQUENCE_ONTOLOGY),
    ("sbo", SBO),
    ("biopax", BIOPAX),
    ("dc", DCTERMS),
    ("dcterms", DCTERMS),
    ("prov", PROV),
    ("owl", OWL),
    ("xsd", XSD),
    ("chebi", CHEBI),
    ("go", GENE_ONTOLOGY),
];

/// Look up the namespace IRI bound to `prefix`.
pub fn namespace(prefix: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, ns)| *ns)
}

/// Expand `prefix:local` into a full IRI.
pub fn expand(prefix: &str, local: &str) -> Option<String> {
    namespace(prefix).map(|ns| format!("{}{}", ns, local))
}
