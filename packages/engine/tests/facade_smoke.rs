use cellsound_engine::{Automaton, SonifierHandle};

#[test]
fn automaton_facade_steps_and_reports() {
    let mut automaton = Automaton::with_config_json(r#"{ "seed": 5 }"#).unwrap();
    automaton.initialize(200.0, 100.0, 10.0).unwrap();
    assert_eq!(automaton.interior_cols(), 20);
    assert_eq!(automaton.interior_rows(), 10);
    assert_eq!(automaton.cells_len(), 22 * 12);
    assert_eq!(automaton.canvas_width(), 200.0);

    automaton.enable_perf_metrics(true);
    automaton.step();
    let stats = automaton.get_step_stats();
    assert_eq!(stats.generation(), 1);
    assert_eq!(stats.population(), automaton.population());
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn sonifier_facade_exposes_triggers_by_index() {
    let mut automaton = Automaton::with_config_json(r#"{ "seed": 5 }"#).unwrap();
    automaton.initialize(100.0, 100.0, 10.0).unwrap();
    automaton.clear();
    automaton.set_cell(3, 10, true).unwrap();
    automaton.set_cell(7, 10, true).unwrap();

    let mut sonifier = SonifierHandle::new(&automaton);
    assert_eq!(sonifier.scan_column(), -1);

    assert_eq!(sonifier.observe(&automaton), 2);
    assert_eq!(sonifier.trigger_count(), 2);
    assert_eq!(sonifier.trigger_row(0), Some(3));
    assert_eq!(sonifier.trigger_row(1), Some(7));
    assert_eq!(sonifier.trigger_midi_note(0), Some(64 + (3 * 64 / 12) as u8));
    assert!(sonifier.trigger_frequency(1).unwrap() > sonifier.trigger_frequency(0).unwrap());
    assert_eq!(sonifier.scan_x(), 98.0);
    assert_eq!(sonifier.scan_column(), 10);
}

#[test]
fn sonifier_facade_distinguishes_missing_triggers() {
    let mut automaton = Automaton::with_config_json(r#"{ "seed": 5 }"#).unwrap();
    automaton.initialize(100.0, 100.0, 10.0).unwrap();
    automaton.clear();
    // 0 is a valid row index, so a missing trigger reads as None
    automaton.set_cell(1, 10, true).unwrap();

    let mut sonifier = SonifierHandle::new(&automaton);
    assert_eq!(sonifier.trigger_row(0), None);
    assert_eq!(sonifier.observe(&automaton), 1);
    assert_eq!(sonifier.trigger_row(0), Some(1));
    assert_eq!(sonifier.trigger_row(1), None);
    assert_eq!(sonifier.trigger_midi_note(1), None);
    assert_eq!(sonifier.trigger_frequency(1), None);
}

#[test]
fn version_matches_package() {
    assert_eq!(cellsound_engine::version(), env!("CARGO_PKG_VERSION"));
}
