//! Ranking and default-selection policy tests.

mod common;

use oews_trends::models::{RankingProfile, ToggleState};
use oews_trends::TrendEngine;

// ---------------------------------------------------------------------------
// ranked
// ---------------------------------------------------------------------------

#[test]
fn ranked_partitions_and_sorts_by_magnitude() {
    let engine = common::ranked_engine();
    let ranked = engine.rankings().ranked(ToggleState::default());

    let rising: Vec<&str> = ranked
        .increasing
        .iter()
        .map(|s| s.occupation.as_str())
        .collect();
    let falling: Vec<&str> = ranked
        .decreasing
        .iter()
        .map(|s| s.occupation.as_str())
        .collect();

    assert_eq!(rising, vec!["I1", "I2", "I3", "I4", "I5", "I6"]);
    assert_eq!(falling, vec!["D1", "D2", "D3", "D4", "D5"]);
}

#[test]
fn ranked_excludes_incomplete_occupations() {
    let engine = common::sample_engine();
    let ranked = engine.rankings().ranked(ToggleState::default());

    let all: Vec<&str> = ranked
        .increasing
        .iter()
        .chain(&ranked.decreasing)
        .map(|s| s.occupation.as_str())
        .collect();

    assert!(!all.contains(&"Postal Clerks"));
    assert!(!all.contains(&"Travel Agents"));
    assert_eq!(all.len(), 5);
}

// ---------------------------------------------------------------------------
// default_selection
// ---------------------------------------------------------------------------

#[test]
fn desktop_takes_top_five_risers_and_top_four_fallers() {
    let engine = common::ranked_engine();
    let selection = engine
        .rankings()
        .default_selection(RankingProfile::Desktop, ToggleState::default());

    assert_eq!(
        selection,
        vec!["I1", "I2", "I3", "I4", "I5", "D1", "D2", "D3", "D4"]
    );
}

#[test]
fn mobile_takes_single_top_riser() {
    let engine = common::ranked_engine();
    let selection = engine
        .rankings()
        .default_selection(RankingProfile::Mobile, ToggleState::default());

    assert_eq!(selection, vec!["I1"]);
}

#[test]
fn default_selection_takes_what_exists_when_short() {
    // Only 3 risers and 2 fallers are valid in the sample set.
    let engine = common::sample_engine();
    let selection = engine
        .rankings()
        .default_selection(RankingProfile::Desktop, ToggleState::default());

    assert_eq!(
        selection,
        vec![
            "Software Developers",
            "Registered Nurses",
            "Bus Drivers",
            "Cashiers",
            "Tellers"
        ]
    );
}

#[test]
fn default_selection_is_deterministic() {
    let engine = common::ranked_engine();
    let first = engine
        .rankings()
        .default_selection(RankingProfile::Desktop, ToggleState::default());
    let second = engine
        .rankings()
        .default_selection(RankingProfile::Desktop, ToggleState::default());
    assert_eq!(first, second);
}

#[test]
fn ties_break_by_input_encounter_order() {
    let records = vec![
        common::record("Beta", 2017, Some(50000.0)),
        common::record("Beta", 2020, Some(52000.0)),
        common::record("Beta", 2023, Some(55000.0)),
        common::record("Alpha", 2017, Some(80000.0)),
        common::record("Alpha", 2020, Some(84000.0)),
        common::record("Alpha", 2023, Some(88000.0)),
    ];
    // Both +10%; "Beta" appears first in the input, so it ranks first.
    let engine = TrendEngine::from_parts(records, common::constant_inflation());
    let ranked = engine.rankings().ranked(ToggleState::default());

    let rising: Vec<&str> = ranked
        .increasing
        .iter()
        .map(|s| s.occupation.as_str())
        .collect();
    assert_eq!(rising, vec!["Beta", "Alpha"]);
}

// ---------------------------------------------------------------------------
// initial_selection
// ---------------------------------------------------------------------------

#[test]
fn initial_selection_fills_slots_in_rank_order() {
    let engine = common::ranked_engine();
    let selection = engine
        .rankings()
        .initial_selection(RankingProfile::Desktop, ToggleState::default());

    assert_eq!(selection.len(), 9);
    assert_eq!(selection.slot_of("I1"), Some(0));
    assert_eq!(selection.slot_of("I5"), Some(4));
    assert_eq!(selection.slot_of("D1"), Some(5));
    assert_eq!(selection.slot_of("D4"), Some(8));
    // A full grid wraps the cursor back to slot 0.
    assert_eq!(selection.next_slot(), 0);
}

#[test]
fn initial_selection_leaves_cursor_after_partial_fill() {
    let engine = common::sample_engine();
    let selection = engine
        .rankings()
        .initial_selection(RankingProfile::Desktop, ToggleState::default());

    assert_eq!(selection.len(), 5);
    assert_eq!(selection.next_slot(), 5);
}

#[test]
fn initial_selection_mobile_is_single_slot() {
    let engine = common::ranked_engine();
    let selection = engine
        .rankings()
        .initial_selection(RankingProfile::Mobile, ToggleState::default());

    assert_eq!(selection.capacity(), 1);
    assert_eq!(selection.slot_of("I1"), Some(0));
}
