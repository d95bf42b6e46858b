// ABOUTME: Input loading and view preparation for nutrition-cli
// ABOUTME: Reads JSON files and applies the scope filter, range filter, and newest-first ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use nutrition_stats::errors::{AppError, AppResult};
use nutrition_stats::intelligence::{
    filter_by_range, filter_by_scope, range_reference_date, scope_label, sort_entries,
    SortDirection, SortKey,
};
use nutrition_stats::models::{
    CycleScope, DailyEntry, LoggingCycle, NutrientTargets, RangeFilter, UserSettings,
};
use serde::de::DeserializeOwned;
use tracing::info;

/// Entries selected for display, newest first, with their rolling-window anchor
pub struct View {
    /// Entries after scope and range filtering
    pub entries: Vec<DailyEntry>,
    /// Anchor for drink windows under the `prev` range
    pub reference_date: Option<NaiveDate>,
    /// Human-readable scope description
    pub scope_label: String,
    /// Range the entries were filtered with
    pub range: RangeFilter,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    if !path.exists() {
        return Err(AppError::not_found(format!("File {}", path.display())));
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::serialization(format!("{} is not valid: {e}", path.display())).with_source(e)
    })
}

/// Load the entries file
pub fn load_entries(path: &Path) -> AppResult<Vec<DailyEntry>> {
    let entries: Vec<DailyEntry> = read_json(path)?;
    info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Load targets; without a file the defaults apply, with `calorie_baseline`
/// as the calorie target used for deficits
pub fn load_targets(path: Option<&Path>, calorie_baseline: f64) -> AppResult<NutrientTargets> {
    path.map_or_else(
        || {
            Ok(NutrientTargets {
                calories: calorie_baseline,
                ..NutrientTargets::default()
            })
        },
        read_json,
    )
}

/// Load the user's settings, if a settings file was given
pub fn load_settings(path: Option<&Path>) -> AppResult<Option<UserSettings>> {
    path.map(read_json).transpose()
}

/// Load logging cycles, if a cycles file was given
pub fn load_cycles(path: Option<&Path>) -> AppResult<Vec<LoggingCycle>> {
    path.map_or_else(|| Ok(Vec::new()), read_json)
}

/// Apply scope then range, and order the result newest first
pub fn prepare_view(
    entries: &[DailyEntry],
    cycles: &[LoggingCycle],
    scope: &CycleScope,
    active_cycle_id: Option<&str>,
    range: RangeFilter,
) -> View {
    let in_scope = filter_by_scope(entries, scope, active_cycle_id);
    let in_range = filter_by_range(&in_scope, range);
    let reference_date = range_reference_date(&in_range, range);

    View {
        entries: sort_entries(&in_range, SortKey::Date, SortDirection::Desc, 0.0),
        reference_date,
        scope_label: scope_label(scope, cycles, active_cycle_id),
        range,
    }
}
