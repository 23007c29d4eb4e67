use statewatch_controller_core::{
    name_hash, resolve_document, ResolveError, ScanWarning, StateRecord,
};

fn resolve_fixture(name: &str) -> statewatch_controller_core::ResolvedModel {
    let doc = statewatch_test_fixtures::controllers::text(name).expect("load fixture");
    resolve_document(&doc).expect("resolve fixture")
}

fn find<'a>(states: &'a [StateRecord], name: &str) -> &'a StateRecord {
    states
        .iter()
        .find(|s| s.state_name() == name)
        .unwrap_or_else(|| panic!("state '{name}' not resolved"))
}

#[test]
fn resolves_a_multi_layer_document() {
    let model = resolve_fixture("locomotion");
    assert!(model.warnings.is_empty());
    assert_eq!(model.states.len(), 4);

    let idle = find(&model.states, "Idle");
    assert_eq!(idle.layer_name(), "Base Layer");
    assert!(idle.is_default_state);
    assert_eq!(idle.tag, 0);

    let run = find(&model.states, "Run");
    assert_eq!(run.layer_name(), "Base Layer");
    assert!(!run.is_default_state);
    // "101" is serialized in base 2.
    assert_eq!(run.tag, 5);

    let jump = find(&model.states, "Jump");
    assert!(!jump.is_default_state);

    // Each layer carries its own default flag.
    let wave = find(&model.states, "Wave");
    assert_eq!(wave.layer_name(), "Upper Body");
    assert!(wave.is_default_state);
}

#[test]
fn section_order_does_not_change_the_output() {
    let layers_first = resolve_fixture("layers-first");
    let states_first = resolve_fixture("states-first");

    assert!(layers_first.warnings.is_empty());
    assert!(states_first.warnings.is_empty());
    assert_eq!(layers_first.states, states_first.states);
}

#[test]
fn name_hash_is_stable_across_documents() {
    let a = resolve_fixture("locomotion");
    let b = resolve_fixture("layers-first");

    let idle_a = find(&a.states, "Idle");
    let idle_b = find(&b.states, "Idle");
    assert_eq!(idle_a.name_hash(), idle_b.name_hash());
    assert_eq!(idle_a.name_hash(), name_hash("Base Layer", "Idle"));
}

#[test]
fn missing_layer_name_fails_the_whole_operation() {
    let doc = statewatch_test_fixtures::controllers::text("missing-layer-name")
        .expect("load fixture");
    let err = resolve_document(&doc).expect_err("layer table must be all-or-nothing");
    assert!(matches!(err, ResolveError::MalformedLayer { .. }));
}

#[test]
fn unresolvable_parent_reference_drops_only_that_state() {
    let model = resolve_fixture("unresolved-parent");

    assert_eq!(model.states.len(), 1);
    assert_eq!(model.states[0].state_name(), "Walk");
    assert!(model.states[0].is_default_state);

    assert!(model
        .warnings
        .iter()
        .any(|w| matches!(w, ScanWarning::UnresolvedLayer { reference, .. } if reference == "999999999")));
    assert!(model
        .warnings
        .iter()
        .any(|w| matches!(w, ScanWarning::IncompleteState { section } if section == "110200001")));
}

#[test]
fn invalid_tag_warns_but_keeps_the_state() {
    let model = resolve_fixture("bad-tag");

    let run = find(&model.states, "Run");
    assert_eq!(run.tag, 0);
    assert_eq!(
        model.warnings,
        vec![ScanWarning::InvalidTag {
            section: "110200002".to_string(),
            raw: "xyz".to_string(),
        }]
    );
}

#[test]
fn empty_state_name_excludes_the_record_and_continues() {
    let model = resolve_fixture("empty-state-name");

    assert_eq!(model.states.len(), 1);
    assert_eq!(model.states[0].state_name(), "Walk");
    assert!(model
        .warnings
        .iter()
        .any(|w| matches!(w, ScanWarning::EmptyStateName { section } if section == "110200001")));
}

#[test]
fn emitted_count_matches_valid_state_sections() {
    // One state-begin marker per fixture state section; the dropped ones are
    // observable through the warning stream.
    for (name, expected_states, expected_drops) in [
        ("locomotion", 4usize, 0usize),
        ("unresolved-parent", 1, 1),
        ("empty-state-name", 1, 1),
        ("bad-tag", 2, 0),
    ] {
        let model = resolve_fixture(name);
        assert_eq!(model.states.len(), expected_states, "fixture {name}");
        let drops = model
            .warnings
            .iter()
            .filter(|w| matches!(w, ScanWarning::IncompleteState { .. }))
            .count();
        assert_eq!(drops, expected_drops, "fixture {name}");
    }
}
