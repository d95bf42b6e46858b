// ABOUTME: Benchmark fixtures for generating realistic daily nutrition entries
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating daily nutrition entries.
//!
//! Entries run backwards one day at a time from a fixed anchor date, so
//! results do not depend on when the benchmark runs.

use chrono::{Days, NaiveDate};
use nutrition_stats::models::{DailyEntry, DailyEntryBuilder};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One month of logging
    Month,
    /// One year of logging
    Year,
    /// Several years of logging
    MultiYear,
}

impl HistorySize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Year => 365,
            Self::MultiYear => 1825,
        }
    }
}

/// Anchor date of every generated history
#[must_use]
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 20).unwrap_or_default()
}

#[allow(clippy::cast_precision_loss)]
fn generate_entry(index: usize) -> DailyEntry {
    let date = anchor_date()
        .checked_sub_days(Days::new(index as u64))
        .unwrap_or_default();
    let wobble = ((index * 37) % 400) as f64;

    let builder = DailyEntryBuilder::new(format!("bench_entry_{index}"), date)
        .owner_id("bench_user")
        .calories(1600.0 + wobble)
        .calories_burned(if index % 5 == 0 { 0.0 } else { 2200.0 + wobble / 2.0 })
        .carbs(180.0 + ((index * 13) % 90) as f64)
        .sugar(30.0 + ((index * 7) % 40) as f64)
        .protein(110.0 + ((index * 11) % 60) as f64)
        .fiber(20.0 + ((index * 3) % 15) as f64)
        .fat(55.0 + ((index * 5) % 30) as f64)
        .sodium(1800.0 + ((index * 29) % 900) as f64);

    match index % 6 {
        0 => builder.build(),
        1 | 2 => builder.drinks(0.0).build(),
        _ => builder.drinks(((index * 17) % 6) as f64).build(),
    }
}

/// Generate a deterministic history, newest first
#[must_use]
pub fn generate_history(size: HistorySize) -> Vec<DailyEntry> {
    (0..size.days()).map(generate_entry).collect()
}
