// ABOUTME: Entries command for nutrition-cli
// ABOUTME: Prints the history table sorted by the requested column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_stats::config::StatsConfig;
use nutrition_stats::errors::AppResult;
use nutrition_stats::intelligence::{
    compute_drink_stats, sort_entries, SortDirection, SortKey,
};
use nutrition_stats::models::{NutrientTargets, Preferences};

use crate::helpers::display::{display_entries_table, display_view_header};
use crate::helpers::input::View;

/// Print the history table; deficits use the calorie target as burn baseline
pub fn run(
    view: &View,
    targets: &NutrientTargets,
    sort: SortKey,
    direction: SortDirection,
    config: &StatsConfig,
    preferences: Preferences,
) -> AppResult<()> {
    let sorted = sort_entries(&view.entries, sort, direction, targets.calories);
    let has_tracked_drinks = view.entries.iter().any(|e| e.drinks.is_tracked());
    let drink_stats = (preferences.show_drinks && has_tracked_drinks)
        .then(|| compute_drink_stats(&view.entries, view.reference_date, &config.drinks));

    display_view_header(view);
    display_entries_table(
        &sorted,
        targets.calories,
        preferences.show_drinks,
        drink_stats.as_ref(),
    );
    Ok(())
}
