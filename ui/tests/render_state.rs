//! End-to-end checks of the fetch→transform pipeline: raw scorecard and
//! metadata text in, a fully ranked render state out.

use ui::core::catalog;
use ui::core::scores::{build_render_state, MISSING_DESCRIPTION, UNKNOWN_CATEGORY};

#[test]
fn similarity_scorecard_builds_a_ranked_state() {
    let metric = catalog::descriptor("SDFusion", "ULIP_similarity.json").expect("catalog entry");
    let scores = r#"{
        "gen_a": {"similarity": 0.41, "ref_modelId": "ref_a"},
        "gen_b": {"similarity": 0.87, "ref_modelId": "ref_b"},
        "gen_c": {"similarity": 0.63, "ref_modelId": "ref_c"}
    }"#;
    let metadata = "modelId,description,category\n\
                    gen_a,a low armchair,chair\n\
                    gen_b,a tall bar stool,chair\n\
                    gen_c,a nightstand with drawers,table\n";

    let state = build_render_state("SDFusion", metric, scores, metadata).expect("state builds");

    let ids: Vec<&str> = state
        .entries
        .iter()
        .map(|entry| entry.generated_id.as_str())
        .collect();
    assert_eq!(ids, ["gen_b", "gen_c", "gen_a"]);
    assert!(state
        .entries
        .windows(2)
        .all(|pair| pair[0].metric >= pair[1].metric));

    // First-seen color order follows the ranking: chair before table.
    assert_eq!(state.categories.index_of("chair"), Some(0));
    assert_eq!(state.categories.index_of("table"), Some(1));

    // Chair average (0.87 + 0.41) / 2, ranked above table's 0.63.
    assert_eq!(state.averages[0].category, "chair");
    assert!((state.averages[0].mean - 0.64).abs() < 1e-9);
}

#[test]
fn distance_scorecard_ranks_ascending_and_defaults_missing_metadata() {
    let metric = catalog::descriptor("Michelangelo", "CD_distance.json").expect("catalog entry");
    let scores = r#"{
        "gen_a": {"distance": 0.052, "ref_modelId": "ref_a"},
        "gen_b": {"distance": 0.017, "ref_modelId": "ref_b"}
    }"#;
    let metadata = "modelId,description,category\ngen_a,a garden bench,bench\n";

    let state = build_render_state("Michelangelo", metric, scores, metadata).expect("state builds");

    assert_eq!(state.title(), "CD Distance (Michelangelo)");
    assert_eq!(state.entries[0].generated_id, "gen_b");
    assert_eq!(state.entries[0].category, UNKNOWN_CATEGORY);
    assert_eq!(state.entries[0].description, MISSING_DESCRIPTION);
    assert_eq!(state.entries[1].category, "bench");

    // Lower distance ranks first, for averages too.
    assert_eq!(state.averages[0].category, UNKNOWN_CATEGORY);
    assert_eq!(state.averages[1].category, "bench");
}

#[test]
fn a_new_state_carries_nothing_over_from_the_previous_one() {
    let similarity =
        catalog::descriptor("SDFusion", "ULIP_similarity.json").expect("catalog entry");

    let first = build_render_state(
        "SDFusion",
        similarity,
        r#"{"gen_1": {"similarity": 0.9, "ref_modelId": "ref_1"}}"#,
        "modelId,description,category\ngen_1,a chair,chair\n",
    )
    .expect("first state");

    let second = build_render_state(
        "Michelangelo",
        catalog::descriptor("Michelangelo", "ULIP_similarity.json").expect("catalog entry"),
        r#"{"gen_2": {"similarity": 0.4, "ref_modelId": "ref_2"}}"#,
        "modelId,description,category\ngen_2,a lamp,lamp\n",
    )
    .expect("second state");

    assert_eq!(first.categories.index_of("chair"), Some(0));
    assert_eq!(second.categories.index_of("chair"), None);
    assert!(second
        .entries
        .iter()
        .all(|entry| entry.generated_id != "gen_1"));
    assert_eq!(second.model, "Michelangelo");
}
