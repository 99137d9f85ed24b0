//! Interaction and protein-protein interaction views.

use sbolgraph_tests::prelude::*;

/// LacI represses pLac, which drives TetR, which represses pTet, which
/// drives LacI.
fn toggle_switch() -> DesignBuilder {
    let mut design = DesignBuilder::new();
    let md = design.md("toggle");
    let laci = design.protein("LacI");
    let tetr = design.protein("TetR");
    let plac = design.part("pLac", ComponentRole::Promoter);
    let ptet = design.part("pTet", ComponentRole::Promoter);

    design.acts_on(&md, "laci_represses_plac", InteractionType::Inhibition, &laci, &plac);
    design.acts_on(&md, "plac_drives_tetr", InteractionType::GeneticProduction, &plac, &tetr);
    design.acts_on(&md, "tetr_represses_ptet", InteractionType::Inhibition, &tetr, &ptet);
    design.acts_on(&md, "ptet_drives_laci", InteractionType::GeneticProduction, &ptet, &laci);
    design
}

/// Three repressors in a ring, each through its own promoter.
fn repressilator() -> DesignBuilder {
    let mut design = DesignBuilder::new();
    let md = design.md("repressilator");
    let proteins: Vec<Term> = ["LacI", "TetR", "cI"].iter().map(|id| design.protein(id)).collect();
    let promoters: Vec<Term> = ["pLac", "pTet", "pR"]
        .iter()
        .map(|id| design.part(id, ComponentRole::Promoter))
        .collect();

    for i in 0..3 {
        let next = (i + 1) % 3;
        design.acts_on(&md, &format!("repression_{i}"), InteractionType::Inhibition, &proteins[i], &promoters[i]);
        design.acts_on(
            &md,
            &format!("production_{i}"),
            InteractionType::GeneticProduction,
            &promoters[i],
            &proteins[next],
        );
    }
    design
}

// ========== TEST: toggle_switch_interactions ==========
#[test]
fn test_toggle_switch_interactions() {
    Scenario::new("toggle")
        .design(toggle_switch().into_statements())
        .pruned()
        .step(ViewKind::Interaction, |a| {
            a.nodes(4)
                .edges(4)
                .has_edge("LacI", "pLac", "Inhibition")
                .has_edge("pLac", "TetR", "Genetic production")
                .has_edge("TetR", "pTet", "Inhibition")
                .has_edge("pTet", "LacI", "Genetic production")
                .no_edge("pLac", "LacI")
                .node_attr("LacI", "role", "Protein")
                .node_attr("pTet", "role", "Promoter")
        })
        .run()
        .expect("scenario passes");
}

// ========== TEST: toggle_switch_proteins ==========
#[test]
fn test_toggle_switch_proteins() {
    // GIVEN the toggle switch
    // WHEN only proteins are kept
    // THEN each repressor acts on the other through a promoter, keeping
    // the label of the first hop
    Scenario::new("toggle-ppi")
        .design(toggle_switch().into_statements())
        .pruned()
        .step(ViewKind::ProteinProteinInteraction, |a| {
            a.nodes(2)
                .edges(2)
                .has_edge("LacI", "TetR", "Inhibition")
                .has_edge("TetR", "LacI", "Inhibition")
                .lacks_node("pLac")
                .node_attr("TetR", "role", "Protein")
        })
        .run()
        .expect("scenario passes");
}

// ========== TEST: repressilator_ring ==========
#[test]
fn test_repressilator_ring() {
    Scenario::new("repressilator")
        .design(repressilator().into_statements())
        .pruned()
        .step(ViewKind::Interaction, |a| a.nodes(6).edges(6))
        .step(ViewKind::ProteinProteinInteraction, |a| {
            a.nodes(3)
                .edges(3)
                .has_edge("LacI", "TetR", "Inhibition")
                .has_edge("TetR", "cI", "Inhibition")
                .has_edge("cI", "LacI", "Inhibition")
                .no_edge("TetR", "LacI")
        })
        .run()
        .expect("scenario passes");
}

// ========== TEST: degradation_is_self_loop ==========
#[test]
fn test_degradation_is_self_loop() {
    // GIVEN a protein degraded on its own
    let mut design = DesignBuilder::new();
    let md = design.md("decay");
    let gfp = design.protein("GFP");
    design.interaction(&md, "gfp_decay", InteractionType::Degradation, &[(&gfp, Some(ParticipantRole::Reactant))]);

    // THEN the interaction loops back onto the protein, in both views
    Scenario::new("degradation")
        .design(design.into_statements())
        .pruned()
        .step(ViewKind::Interaction, |a| a.nodes(1).edges(1).has_edge("GFP", "GFP", "Degradation"))
        .step(ViewKind::ProteinProteinInteraction, |a| a.edges(1).has_edge("GFP", "GFP", "Degradation"))
        .run()
        .expect("scenario passes");
}

// ========== TEST: unmapped_roles_follow_participation_order ==========
#[test]
fn test_unmapped_roles_follow_participation_order() {
    // GIVEN an untyped interaction whose participations carry no roles
    let mut design = DesignBuilder::new();
    let md = design.md("binding");
    let a = design.protein("A");
    let b = design.protein("B");
    design.interaction(&md, "a_with_b", InteractionType::Unrecognized, &[(&a, None), (&b, None)]);

    // THEN the first participant is the input and the label is unknown,
    // while the ownership view attaches no role to either
    Scenario::new("unmapped")
        .design(design.into_statements())
        .step(ViewKind::Interaction, |a| a.edges(1).has_edge("A", "B", "Unknown").no_edge("B", "A"))
        .step(ViewKind::Parent, |a| {
            a.has_edge("binding", "a_with_b", "interaction")
                .lacks_attr("a_with_b", "role")
                .lacks_attr("A_participation", "role")
        })
        .run()
        .expect("scenario passes");
}

// ========== TEST: same_side_participants_are_not_linked ==========
#[test]
fn test_same_side_participants_are_not_linked() {
    // GIVEN two reactants and one product
    let mut design = DesignBuilder::new();
    let md = design.md("complex");
    let a = design.protein("A");
    let b = design.protein("B");
    let ab = design.protein("AB");
    design.interaction(
        &md,
        "bind",
        InteractionType::NoncovalentBonding,
        &[
            (&a, Some(ParticipantRole::Reactant)),
            (&b, Some(ParticipantRole::Reactant)),
            (&ab, Some(ParticipantRole::Product)),
        ],
    );

    // THEN each reactant feeds the product and the reactants stay apart
    Scenario::new("complex")
        .design(design.into_statements())
        .pruned()
        .step(ViewKind::Interaction, |a| {
            a.edges(2)
                .has_edge("A", "AB", "Noncovalent bonding")
                .has_edge("B", "AB", "Noncovalent bonding")
                .no_edge("A", "B")
                .no_edge("B", "A")
        })
        .run()
        .expect("scenario passes");
}

// ========== TEST: participant_without_definition_fails ==========
#[test]
fn test_participant_without_definition_fails() {
    let mut design = toggle_switch();
    let fc = design.fc(&Term::iri("http://example.org/toggle/1"), &Term::iri("http://example.org/LacI/1"));
    design.remove(&fc, Predicate::Definition);

    Scenario::new("broken-toggle")
        .design(design.into_statements())
        .step(ViewKind::Interaction, |a| a.error("definition"))
        .step(ViewKind::ProteinProteinInteraction, |a| a.error("definition"))
        .run()
        .expect("scenario passes");
}
