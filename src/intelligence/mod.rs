// ABOUTME: Statistics and aggregation engine over daily nutrition entries
// ABOUTME: Deficits, averages, medians, trends, drink windows, range and cycle filters, ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure functions that turn a collection of daily entries into derived
//! values. Components, leaves first:
//!
//! - [`dates`]: entry date parsing and whole-day arithmetic
//! - [`nutrition_calculator`]: per-entry deficit and macro energy split
//! - [`statistical_analysis`]: average, median, regression slope, split-half medians
//! - [`trend`]: up/down/stable classification and trend-card summaries
//! - [`drink_analysis`]: rolling-window drink accounting
//! - [`range_filter`] and [`cycle_scope`]: entry selection
//! - [`entry_ordering`]: table ordering
//!
//! Missing quantities read as zero, empty collections produce zero
//! statistics, and degenerate regressions produce a zero slope. None of
//! these functions fail.

/// Cycle scope filtering and labels
pub mod cycle_scope;
/// Entry date helpers
pub mod dates;
/// Rolling-window drink analytics
pub mod drink_analysis;
/// Entry ordering for tables and chronological processing
pub mod entry_ordering;
/// Daily deficit and macro split
pub mod nutrition_calculator;
/// Range filter views
pub mod range_filter;
/// Aggregate statistics
pub mod statistical_analysis;
/// Trend classification and nutrient summaries
pub mod trend;

pub use cycle_scope::{
    default_cycle_name, filter_by_scope, has_legacy_entries, order_cycles, scope_label,
    selected_cycle_entry_count,
};
pub use dates::{days_before, days_between, format_entry_date, local_today, parse_entry_date};
pub use drink_analysis::{
    compute_drink_stats, compute_drink_stats_at, filter_tracked_drinks, window_index, DrinkStats,
};
pub use entry_ordering::{
    order_chronologically, sort_entries, SortDirection, SortKey, TableSortState,
};
pub use nutrition_calculator::{
    compute_daily_deficit, entry_macro_split, macro_split, MacroPercentages,
};
pub use range_filter::{filter_by_range, filter_by_range_at, range_reference_date};
pub use statistical_analysis::{SplitHalfMedians, StatisticalAnalyzer};
pub use trend::{
    compute_deficit_trend, compute_trend, compute_trend_by, summarize_nutrients, trend_direction,
    NutrientSummary, SummaryMetric, TrendDirection, TrendResult,
};
