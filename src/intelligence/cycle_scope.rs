// ABOUTME: Cycle scope filtering and labelling for logging cycles
// ABOUTME: Narrows entries to all history, the active cycle, legacy entries, or one named cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use tracing::debug;

use super::dates::format_entry_date;
use crate::models::{CycleScope, DailyEntry, LoggingCycle};

/// Entries inside `scope`
///
/// `Active` without an active cycle selects nothing. Scope filtering runs
/// before range filtering.
#[must_use]
pub fn filter_by_scope(
    entries: &[DailyEntry],
    scope: &CycleScope,
    active_cycle_id: Option<&str>,
) -> Vec<DailyEntry> {
    let filtered: Vec<DailyEntry> = match scope {
        CycleScope::All => entries.to_vec(),
        CycleScope::Legacy => entries
            .iter()
            .filter(|entry| entry.is_legacy())
            .cloned()
            .collect(),
        CycleScope::Active | CycleScope::Cycle(_) => {
            match scope.selected_cycle_id(active_cycle_id) {
                Some(cycle_id) => entries_in_cycle(entries, cycle_id).cloned().collect(),
                None => Vec::new(),
            }
        }
    };

    debug!(
        scope = %scope,
        total = entries.len(),
        kept = filtered.len(),
        "Applied cycle scope"
    );
    filtered
}

fn entries_in_cycle<'a>(
    entries: &'a [DailyEntry],
    cycle_id: &'a str,
) -> impl Iterator<Item = &'a DailyEntry> {
    entries
        .iter()
        .filter(move |entry| entry.cycle_id.as_deref() == Some(cycle_id))
}

/// Whether any entry belongs to no cycle
#[must_use]
pub fn has_legacy_entries(entries: &[DailyEntry]) -> bool {
    entries.iter().any(DailyEntry::is_legacy)
}

/// Number of entries in the cycle `scope` points at; 0 for `All` and `Legacy`
#[must_use]
pub fn selected_cycle_entry_count(
    entries: &[DailyEntry],
    scope: &CycleScope,
    active_cycle_id: Option<&str>,
) -> usize {
    scope
        .selected_cycle_id(active_cycle_id)
        .map_or(0, |cycle_id| entries_in_cycle(entries, cycle_id).count())
}

/// Human-readable description of the current scope
#[must_use]
pub fn scope_label(
    scope: &CycleScope,
    cycles: &[LoggingCycle],
    active_cycle_id: Option<&str>,
) -> String {
    let find = |id: Option<&str>| {
        id.and_then(|id| cycles.iter().find(|cycle| cycle.id == id))
    };

    match scope {
        CycleScope::All => "Viewing all history".to_owned(),
        CycleScope::Legacy => "Viewing legacy entries (no cycle)".to_owned(),
        CycleScope::Active => find(active_cycle_id).map_or_else(
            || "No active cycle selected".to_owned(),
            |cycle| format!("Viewing current cycle: {}", cycle.name),
        ),
        CycleScope::Cycle(id) => find(Some(id.as_str())).map_or_else(
            || "Viewing selected scope".to_owned(),
            |cycle| format!("Viewing cycle: {}", cycle.name),
        ),
    }
}

/// Suggested name for a cycle created on `date`
#[must_use]
pub fn default_cycle_name(date: NaiveDate) -> String {
    format!("Cycle {}", format_entry_date(date))
}

/// Cycles ordered newest first
#[must_use]
pub fn order_cycles(cycles: &[LoggingCycle]) -> Vec<LoggingCycle> {
    let mut ordered = cycles.to_vec();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ordered
}
