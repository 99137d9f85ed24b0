//! Sequence order view.

use pretty_assertions::assert_eq;
use sbolgraph_tests::prelude::*;

/// An expression cassette whose annotations are added out of order, with a
/// scar cut between the CDS and the terminator and one unplaced feature.
fn cassette() -> (DesignBuilder, Term) {
    let mut design = DesignBuilder::new();
    let device = design.part("cassette", ComponentRole::EngineeredRegion);
    let parts = [
        ("B0015", ComponentRole::Terminator, Location::Range(300, 340)),
        ("pTet", ComponentRole::Promoter, Location::Range(1, 55)),
        ("E0040", ComponentRole::Cds, Location::Range(76, 295)),
        ("B0034", ComponentRole::Rbs, Location::Range(56, 75)),
    ];
    for (id, role, location) in parts {
        let definition = design.part(id, role);
        let instance = design.component(&device, &definition);
        design.annotation(&device, &format!("{id}_anno"), Some(&instance), location);
    }
    design.annotation(&device, "scar", None, Location::Cut(296));
    design.annotation(&device, "note", None, Location::Generic);
    (design, device)
}

// ========== TEST: annotations_chain_by_start ==========
#[test]
fn test_annotations_chain_by_start() {
    // GIVEN annotations added in shuffled order
    let (design, _) = cassette();

    // WHEN the sequence view is produced
    // THEN locations are chained by start coordinate and named by role
    Scenario::new("sequence")
        .design(design.statements())
        .pruned()
        .step(ViewKind::SequenceOrder, |a| {
            a.nodes(11)
                .edges(14)
                .has_edge("cassette", "pTet_anno", "sequenceAnnotation")
                .has_edge("pTet_anno", "Promoter", "location")
                .has_edge("Promoter", "RBS", "precedes")
                .has_edge("RBS", "CDS", "precedes")
                .has_edge("CDS", "Unknown", "precedes")
                .has_edge("Unknown", "Terminator", "precedes")
                .no_edge("Promoter", "Terminator")
                .lacks_node("note")
                .node_attr("Promoter", "start", 1i64)
                .node_attr("Promoter", "end", 55i64)
                .node_attr("Unknown", "start", 296i64)
                .node_attr("Unknown", "end", 296i64)
        })
        .run()
        .expect("scenario passes");
}

// ========== TEST: sequence_order_query ==========
#[test]
fn test_sequence_order_query() {
    init_tracing();
    let (design, device) = cassette();
    let store = design.store_with(StoreConfig::pruned());
    let query = SbolQuery::new(store.graph());

    let order = query.sequence_order(&device).expect("valid coordinates");

    let names: Vec<&str> = order.iter().map(|entry| entry.role_name).collect();
    assert_eq!(names, vec!["Promoter", "RBS", "CDS", "Unknown", "Terminator"]);
    let starts: Vec<i64> = order.iter().map(|entry| entry.start).collect();
    assert_eq!(starts, vec![1, 56, 76, 296, 300]);
}

// ========== TEST: bad_coordinate_fails ==========
#[test]
fn test_bad_coordinate_fails() {
    // GIVEN a range whose start is not an integer
    let mut design = DesignBuilder::new();
    let device = design.part("device", ComponentRole::EngineeredRegion);
    design.annotation(&device, "site", None, Location::Range(1, 10));
    let range = Term::iri("http://example.org/device/site/range/1");
    design.remove(&range, Predicate::Start);
    design.push(&range, Predicate::Start, Literal::new("first"));

    // THEN the view reports the literal
    Scenario::new("bad-start")
        .design(design.into_statements())
        .step(ViewKind::SequenceOrder, |a| a.error("first"))
        .run()
        .expect("scenario passes");
}

// ========== TEST: definitions_without_annotations_are_absent ==========
#[test]
fn test_definitions_without_annotations_are_absent() {
    let mut design = DesignBuilder::new();
    design.part("pTet", ComponentRole::Promoter);

    Scenario::new("no-annotations")
        .design(design.into_statements())
        .step(ViewKind::SequenceOrder, |a| a.empty())
        .run()
        .expect("scenario passes");
}
