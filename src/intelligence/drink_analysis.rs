// ABOUTME: Rolling-window drink analytics over tracked drink counts
// ABOUTME: Daily averages over drinking days, trailing window totals, and historical window statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Drink analytics
//!
//! Only entries with a tracked drink count take part. Days logged as zero
//! count toward window totals but are left out of the daily average and
//! median, which describe drinking days only.
//!
//! Windows are non-overlapping runs of `window_days` days ending at the
//! reference date. Window 0 holds the reference date and the preceding six
//! days, window 1 the seven days before that, and so on. Entries dated after
//! the reference date fall in negative windows and are ignored by the window
//! statistics.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dates::{days_before, days_between, local_today};
use super::statistical_analysis::StatisticalAnalyzer;
use crate::config::DrinkTargetConfig;
use crate::models::DailyEntry;

/// Drink statistics snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkStats {
    /// Mean drinks over days with at least one drink
    pub daily_avg: f64,
    /// Median drinks over days with at least one drink
    pub daily_median: f64,
    /// Number of days with at least one drink
    pub days_with_drinks: usize,
    /// Drinking days within the trailing window
    pub days_with_drinks_last7: usize,
    /// Total drinks in the trailing window
    pub current_week_total: f64,
    /// Mean total over historical windows
    pub weekly_avg_total: f64,
    /// Median total over historical windows
    pub weekly_median_total: f64,
    /// Daily average or median is above the daily target
    pub daily_exceeds_target: bool,
    /// Trailing window total is above the weekly target
    pub weekly_exceeds_target: bool,
    /// At least one historical window has tracked entries
    pub has_complete_weeks: bool,
}

/// Entries whose drink count was logged, zero included
#[must_use]
pub fn filter_tracked_drinks(entries: &[DailyEntry]) -> Vec<&DailyEntry> {
    entries
        .iter()
        .filter(|entry| entry.drinks.is_tracked())
        .collect()
}

/// Drink statistics anchored at `reference`, or at today's local date when `None`
#[must_use]
pub fn compute_drink_stats(
    entries: &[DailyEntry],
    reference: Option<NaiveDate>,
    targets: &DrinkTargetConfig,
) -> DrinkStats {
    compute_drink_stats_at(entries, reference.unwrap_or_else(local_today), targets)
}

/// Drink statistics anchored at an explicit reference date
#[must_use]
pub fn compute_drink_stats_at(
    entries: &[DailyEntry],
    reference: NaiveDate,
    targets: &DrinkTargetConfig,
) -> DrinkStats {
    let tracked = filter_tracked_drinks(entries);
    if tracked.is_empty() {
        return DrinkStats::default();
    }

    let window_days = targets.window_days.max(1);

    let drinking_days: Vec<f64> = tracked
        .iter()
        .filter_map(|entry| entry.drinks.positive_value())
        .collect();
    let daily_avg = StatisticalAnalyzer::average(&drinking_days);
    let daily_median = StatisticalAnalyzer::median(&drinking_days);

    let window_start = days_before(reference, window_days);
    let days_with_drinks_last7 = tracked
        .iter()
        .filter(|entry| entry.drinks.is_positive())
        .filter(|entry| entry.date > window_start && entry.date <= reference)
        .count();

    let totals = window_totals(&tracked, reference, window_days);
    let current_week_total = totals.get(&0_i64).copied().unwrap_or(0.0);
    let historical: Vec<f64> = totals
        .range(1_i64..)
        .map(|(_, total)| *total)
        .collect();
    let has_complete_weeks = !historical.is_empty();

    let stats = DrinkStats {
        daily_avg,
        daily_median,
        days_with_drinks: drinking_days.len(),
        days_with_drinks_last7,
        current_week_total,
        weekly_avg_total: StatisticalAnalyzer::average(&historical),
        weekly_median_total: StatisticalAnalyzer::median(&historical),
        daily_exceeds_target: daily_avg > targets.daily_target
            || daily_median > targets.daily_target,
        weekly_exceeds_target: current_week_total > targets.weekly_target,
        has_complete_weeks,
    };

    debug!(
        tracked = tracked.len(),
        drinking_days = stats.days_with_drinks,
        historical_windows = historical.len(),
        %reference,
        "Computed drink statistics"
    );
    stats
}

/// Index of the rolling window holding `date`; negative for dates after `reference`
#[must_use]
pub fn window_index(date: NaiveDate, reference: NaiveDate, window_days: i64) -> i64 {
    days_between(date, reference).div_euclid(window_days.max(1))
}

/// Sum of tracked drinks per window index
fn window_totals(
    tracked: &[&DailyEntry],
    reference: NaiveDate,
    window_days: i64,
) -> BTreeMap<i64, f64> {
    let mut totals = BTreeMap::new();
    for entry in tracked {
        let count = entry.drinks.tracked_value().unwrap_or(0.0);
        *totals
            .entry(window_index(entry.date, reference, window_days))
            .or_insert(0.0) += count;
    }
    totals
}
