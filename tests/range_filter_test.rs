// ABOUTME: Integration tests for range and cycle scope filtering
// ABOUTME: Covers day-window cutoffs, the prev view with duplicate dates, and cycle scopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{cycle, cycle_entry, date, untracked_entry};
use nutrition_stats::intelligence::{
    default_cycle_name, filter_by_range_at, filter_by_scope, has_legacy_entries, order_cycles, range_reference_date,
    scope_label, selected_cycle_entry_count,
};
use nutrition_stats::models::{CycleScope, DailyEntry, RangeFilter};

fn dates(entries: &[DailyEntry]) -> Vec<String> {
    entries.iter().map(|e| e.date.to_string()).collect()
}

#[test]
fn test_last_seven_days_includes_cutoff_and_future() {
    common::init_test_logging();
    let entries = vec![
        untracked_entry("2025-11-21"),
        untracked_entry("2025-11-20"),
        untracked_entry("2025-11-13"),
        untracked_entry("2025-11-12"),
    ];
    let kept = filter_by_range_at(&entries, RangeFilter::Last7Days, date("2025-11-20"));
    assert_eq!(dates(&kept), ["2025-11-21", "2025-11-20", "2025-11-13"]);
}

#[test]
fn test_three_and_thirty_day_ranges() {
    let entries = vec![
        untracked_entry("2025-11-20"),
        untracked_entry("2025-11-17"),
        untracked_entry("2025-11-16"),
        untracked_entry("2025-10-21"),
        untracked_entry("2025-10-20"),
    ];
    let today = date("2025-11-20");
    assert_eq!(
        filter_by_range_at(&entries, RangeFilter::Last3Days, today).len(),
        2
    );
    assert_eq!(
        filter_by_range_at(&entries, RangeFilter::Last30Days, today).len(),
        4
    );
    assert_eq!(filter_by_range_at(&entries, RangeFilter::All, today).len(), 5);
}

#[test]
fn test_prev_drops_every_entry_on_the_latest_date() {
    let entries = vec![
        untracked_entry("2025-11-18"),
        untracked_entry("2025-11-20"),
        untracked_entry("2025-11-19"),
        untracked_entry("2025-11-20"),
    ];
    let kept = filter_by_range_at(&entries, RangeFilter::Previous, date("2025-11-20"));
    assert_eq!(dates(&kept), ["2025-11-18", "2025-11-19"]);
    assert_eq!(
        range_reference_date(&kept, RangeFilter::Previous),
        Some(date("2025-11-19"))
    );
}

#[test]
fn test_prev_with_too_few_entries_is_empty() {
    let today = date("2025-11-20");
    assert!(filter_by_range_at(&[], RangeFilter::Previous, today).is_empty());
    assert!(filter_by_range_at(
        &[untracked_entry("2025-11-20")],
        RangeFilter::Previous,
        today
    )
    .is_empty());

    // both entries share the latest date
    let tied = vec![untracked_entry("2025-11-19"), untracked_entry("2025-11-19")];
    let kept = filter_by_range_at(&tied, RangeFilter::Previous, today);
    assert!(kept.is_empty());
    assert_eq!(range_reference_date(&kept, RangeFilter::Previous), None);
}

#[test]
fn test_reference_date_only_for_prev() {
    let entries = vec![untracked_entry("2025-11-19")];
    assert_eq!(range_reference_date(&entries, RangeFilter::Last7Days), None);
    assert_eq!(range_reference_date(&entries, RangeFilter::All), None);
}

fn cycle_history() -> Vec<DailyEntry> {
    vec![
        cycle_entry("2025-11-20", "c2"),
        cycle_entry("2025-11-19", "c2"),
        cycle_entry("2025-10-10", "c1"),
        untracked_entry("2025-09-01"),
    ]
}

#[test]
fn test_scope_filters() {
    let entries = cycle_history();

    assert_eq!(filter_by_scope(&entries, &CycleScope::All, None).len(), 4);
    assert_eq!(
        dates(&filter_by_scope(&entries, &CycleScope::Legacy, Some("c2"))),
        ["2025-09-01"]
    );
    assert_eq!(
        filter_by_scope(&entries, &CycleScope::Active, Some("c2")).len(),
        2
    );
    assert!(filter_by_scope(&entries, &CycleScope::Active, None).is_empty());
    assert_eq!(
        dates(&filter_by_scope(
            &entries,
            &CycleScope::Cycle("c1".to_owned()),
            Some("c2")
        )),
        ["2025-10-10"]
    );
    assert!(filter_by_scope(&entries, &CycleScope::Cycle("gone".to_owned()), None).is_empty());
}

#[test]
fn test_scope_then_range() {
    let in_scope = filter_by_scope(&cycle_history(), &CycleScope::Active, Some("c2"));
    let kept = filter_by_range_at(&in_scope, RangeFilter::Previous, date("2025-11-20"));
    assert_eq!(dates(&kept), ["2025-11-19"]);
}

#[test]
fn test_selected_cycle_counts_and_legacy_detection() {
    let entries = cycle_history();
    assert!(has_legacy_entries(&entries));
    assert!(!has_legacy_entries(&entries[..3]));
    assert_eq!(
        selected_cycle_entry_count(&entries, &CycleScope::Active, Some("c2")),
        2
    );
    assert_eq!(
        selected_cycle_entry_count(&entries, &CycleScope::All, Some("c2")),
        0
    );
}

#[test]
fn test_scope_labels() {
    let cycles = vec![
        cycle("c1", "Autumn cut", "2025-09-15T08:00:00Z"),
        cycle("c2", "Winter bulk", "2025-11-01T08:00:00Z"),
    ];

    assert_eq!(scope_label(&CycleScope::All, &cycles, None), "Viewing all history");
    assert_eq!(
        scope_label(&CycleScope::Legacy, &cycles, None),
        "Viewing legacy entries (no cycle)"
    );
    assert_eq!(
        scope_label(&CycleScope::Active, &cycles, Some("c2")),
        "Viewing current cycle: Winter bulk"
    );
    assert_eq!(
        scope_label(&CycleScope::Active, &cycles, None),
        "No active cycle selected"
    );
    assert_eq!(
        scope_label(&CycleScope::Cycle("c1".to_owned()), &cycles, Some("c2")),
        "Viewing cycle: Autumn cut"
    );
    assert_eq!(
        scope_label(&CycleScope::Cycle("zz".to_owned()), &cycles, None),
        "Viewing selected scope"
    );

    let ordered = order_cycles(&cycles);
    assert_eq!(ordered[0].id, "c2");
    assert_eq!(default_cycle_name(date("2025-01-05")), "Cycle 2025-01-05");
}

#[test]
fn test_scope_tags_parse() {
    assert_eq!("all".parse::<CycleScope>().unwrap(), CycleScope::All);
    assert_eq!(
        "cycle:c9".parse::<CycleScope>().unwrap(),
        CycleScope::Cycle("c9".to_owned())
    );
    assert!("cycle:".parse::<CycleScope>().is_err());
    assert_eq!("prev".parse::<RangeFilter>().unwrap(), RangeFilter::Previous);
}
