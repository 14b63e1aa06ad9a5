#![allow(unused)]
//! Comparison selection harness.
//!
//! # What this covers
//!
//! - **Minimum gate**: zero or one residence is rejected, two or more are
//!   accepted with input order preserved, and there is no upper bound.
//! - **Selection tracker**: toggling by name, pick order, configured cap.
//! - **Comparison table**: one column per residence, placeholder rows
//!   skipped, values read from each residence.
//!
//! # Running
//!
//! ```sh
//! cargo test --test selection_harness
//! ```

mod common;
use common::*;
use housing_core::{
    select_for_compare, ComparisonTable, Language, SelectionError, SelectionTracker, MIN_COMPARE,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Minimum gate
// ---------------------------------------------------------------------------

#[test]
fn empty_selection_is_rejected() {
    assert_eq!(
        select_for_compare(&[]),
        Err(SelectionError::TooFew { required: MIN_COMPARE, selected: 0 })
    );
}

#[test]
fn single_selection_is_rejected_with_message() {
    let err = select_for_compare(&[residence("Thompson", &[])]).unwrap_err();
    assert!(err.to_string().contains("select at least two"), "{err}");
}

#[test]
fn two_residences_keep_input_order() {
    let picked = vec![residence("Stanton", &[]), residence("Thompson", &[])];
    let cmp = select_for_compare(&picked).unwrap();
    assert_eq!(cmp.residences, picked);
}

proptest! {
    #[test]
    fn prop_no_upper_bound(n in 2usize..40) {
        let picked: Vec<_> = (0..n).map(|i| residence(&format!("r{i}"), &[])).collect();
        let cmp = select_for_compare(&picked).unwrap();
        prop_assert_eq!(cmp.residences.len(), n);
    }
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

#[test]
fn tracker_resolves_in_pick_order() {
    let info = campus_info();
    let mut tracker = SelectionTracker::new(0);
    tracker.toggle("Stanton").unwrap();
    tracker.toggle("Thompson").unwrap();

    let picked = tracker.resolve(&info.residences).unwrap();
    let names: Vec<_> = picked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Stanton", "Thompson"]);
}

#[test]
fn tracker_cap_rejects_without_change() {
    let mut tracker = SelectionTracker::new(1);
    tracker.toggle("Stanton").unwrap();
    let before = tracker.clone();
    assert_eq!(tracker.toggle("Rideau"), Err(SelectionError::LimitReached { max: 1 }));
    assert_eq!(tracker, before);
}

// ---------------------------------------------------------------------------
// Comparison table
// ---------------------------------------------------------------------------

#[test]
fn table_lines_up_values_per_residence() {
    let info = campus_info();
    let cmp = select_for_compare(&[
        info.residence("Thompson").unwrap().clone(),
        info.residence("Rideau").unwrap().clone(),
    ])
    .unwrap();

    let table = ComparisonTable::build(&info.categories, &cmp, &Language::En);
    assert_eq!(table.columns, vec!["Thompson", "Rideau"]);

    let groups: Vec<_> = table.groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(groups, vec!["Room Types", "Amenities", "Meals", "Policies"]);

    let room_types = &table.groups[0];
    let keys: Vec<_> = room_types.rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["traditional", "suite"], "placeholder must be skipped");
    assert_eq!(room_types.rows[0].values, vec![true, false]);
    assert_eq!(room_types.rows[1].values, vec![false, true]);

    let pets = &table.groups[3].rows[0];
    assert_eq!(pets.values, vec![false, false]);
}

#[test]
fn table_uses_active_language() {
    let info = campus_info();
    let cmp = select_for_compare(&info.residences).unwrap();
    let table = ComparisonTable::build(&info.categories, &cmp, &Language::Fr);
    assert_eq!(table.groups[0].category, "Types de chambres");
    // No French name for Policies: falls back to English.
    assert_eq!(table.groups[3].category, "Policies");
}
