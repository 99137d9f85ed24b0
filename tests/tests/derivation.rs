//! Combinatorial derivation view.

use sbolgraph_tests::prelude::*;

/// A promoter library: the template's promoter slot varies over pLac,
/// directly, and over the members of a promoter collection.
fn library() -> (DesignBuilder, Term) {
    let mut design = DesignBuilder::new();
    let template = design.part("template", ComponentRole::EngineeredRegion);
    let placeholder = design.part("pTet", ComponentRole::Promoter);
    let slot = design.component(&template, &placeholder);
    let plac = design.part("pLac", ComponentRole::Promoter);
    let pr = design.part("pR", ComponentRole::Promoter);
    let notes = design.md("notes");
    let promoters = design.collection("promoters", &[&pr, &notes]);

    let derivation = design.derivation("library", &template, Some("enumerate"));
    let vc = design.variable_component(&derivation, "promoter_slot", &slot, "one", &[&plac], &[&promoters]);
    (design, vc)
}

// ========== TEST: derivation_view ==========
#[test]
fn test_derivation_view() {
    // GIVEN a library varying one slot
    let (design, _) = library();

    // WHEN the derivation view is produced
    // THEN it links strategy, slot, operator and every definition variant
    Scenario::new("derivation")
        .design(design.statements())
        .pruned()
        .step(ViewKind::CombinatorialDerivation, |a| {
            a.nodes(7)
                .edges(6)
                .has_edge("library", "enumerate", "strategy")
                .has_edge("library", "promoter_slot", "variableComponent")
                .has_edge("promoter_slot", "pTet_instance", "variable")
                .has_edge("promoter_slot", "one", "operator")
                .has_edge("promoter_slot", "pLac", "variant")
                .has_edge("promoter_slot", "pR", "variant")
                .lacks_node("notes")
                .node_attr("pR", "role", "Promoter")
        })
        .run()
        .expect("scenario passes");
}

// ========== TEST: derivation_without_strategy ==========
#[test]
fn test_derivation_without_strategy() {
    let mut design = DesignBuilder::new();
    let template = design.part("template", ComponentRole::EngineeredRegion);
    let slot_def = design.part("slot", ComponentRole::Cds);
    let slot = design.component(&template, &slot_def);
    let derivation = design.derivation("library", &template, None);
    design.variable_component(&derivation, "cds_slot", &slot, "zeroOrOne", &[], &[]);

    Scenario::new("no-strategy")
        .design(design.into_statements())
        .pruned()
        .step(ViewKind::CombinatorialDerivation, |a| {
            a.edges(3)
                .has_edge("library", "cds_slot", "variableComponent")
                .has_edge("cds_slot", "zeroOrOne", "operator")
                .no_edge("library", "enumerate")
        })
        .run()
        .expect("scenario passes");
}

// ========== TEST: missing_operator_fails ==========
#[test]
fn test_missing_operator_fails() {
    let (mut design, vc) = library();
    design.remove(&vc, Predicate::Operator);

    Scenario::new("no-operator")
        .design(design.into_statements())
        .step(ViewKind::CombinatorialDerivation, |a| a.error("operator"))
        .run()
        .expect("scenario passes");
}

// ========== TEST: missing_variable_fails ==========
#[test]
fn test_missing_variable_fails() {
    let (mut design, vc) = library();
    design.remove(&vc, Predicate::Variable);

    Scenario::new("no-variable")
        .design(design.into_statements())
        .step(ViewKind::CombinatorialDerivation, |a| a.error("variable"))
        .run()
        .expect("scenario passes");
}
