// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and daily entry builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrition_stats`

use std::env;
use std::sync::Once;

use chrono::{DateTime, Days, NaiveDate, Utc};
use nutrition_stats::models::{DailyEntry, DailyEntryBuilder, LoggingCycle};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// Entry with only a date set
pub fn entry(day: &str) -> DailyEntryBuilder {
    DailyEntryBuilder::new(format!("entry-{day}"), date(day))
}

/// Entry with calories consumed and burned
pub fn calorie_entry(day: &str, calories: f64, burned: f64) -> DailyEntry {
    entry(day).calories(calories).calories_burned(burned).build()
}

/// Entry with a tracked drink count
pub fn drink_entry(day: &str, drinks: f64) -> DailyEntry {
    entry(day).drinks(drinks).build()
}

/// Entry with no drinks field
pub fn untracked_entry(day: &str) -> DailyEntry {
    entry(day).build()
}

/// Entry assigned to a logging cycle
pub fn cycle_entry(day: &str, cycle_id: &str) -> DailyEntry {
    entry(day).cycle_id(cycle_id).build()
}

/// Logging cycle created at an RFC 3339 timestamp
pub fn cycle(id: &str, name: &str, created_at: &str) -> LoggingCycle {
    LoggingCycle {
        id: id.to_owned(),
        owner_id: "user-1".to_owned(),
        name: name.to_owned(),
        created_at: DateTime::parse_from_rfc3339(created_at)
            .unwrap()
            .with_timezone(&Utc),
    }
}

/// Three weeks of varied entries ending on 2025-11-20
pub fn three_week_history() -> Vec<DailyEntry> {
    (0..21)
        .map(|offset: u32| {
            let day = date("2025-10-31") + Days::new(u64::from(offset));
            let bump = f64::from(offset);
            let builder = DailyEntryBuilder::new(format!("entry-{offset}"), day)
                .calories(1800.0 + bump * 10.0)
                .calories_burned(if offset % 3 == 0 { 0.0 } else { 2300.0 })
                .carbs(200.0 + bump)
                .sugar(40.0)
                .protein(120.0 + bump * 2.0)
                .fiber(25.0)
                .fat(60.0)
                .sodium(2100.0);
            if offset % 4 == 0 {
                builder.build()
            } else {
                builder.drinks(f64::from(offset % 3)).build()
            }
        })
        .collect()
}
