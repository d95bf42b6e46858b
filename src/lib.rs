// ABOUTME: Main library entry point for the nutrition statistics engine
// ABOUTME: Turns daily nutrition entries into deficits, trends, drink analytics, and CSV exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Stats
//!
//! Pure computation layer behind a personal nutrition-tracking dashboard.
//! Callers hand in a collection of [`models::DailyEntry`] records plus
//! targets, a calorie-burn baseline, or a reference date, and get derived
//! values back. Nothing here performs I/O or keeps state between calls.
//!
//! ## Architecture
//!
//! - **Models**: entries, targets, cycles, and range tags (from `nutrition-core`)
//! - **Intelligence**: deficits, aggregate statistics, trends, drink windows,
//!   range and cycle filtering, entry ordering
//! - **Formatters**: fixed-point numbers, display dates, CSV export
//! - **Config**: thresholds and drink targets with environment overrides
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use nutrition_stats::intelligence::compute_daily_deficit;
//! use nutrition_stats::models::DailyEntryBuilder;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();
//! let entry = DailyEntryBuilder::new("e1", date)
//!     .calories(1800.0)
//!     .calories_burned(2200.0)
//!     .build();
//!
//! assert!((compute_daily_deficit(&entry, 2000.0) - 400.0).abs() < f64::EPSILON);
//! ```

// ── Public API ──────────────────────────────────────────────────────────

/// Engine configuration: trend thresholds and drink targets
pub mod config;
/// Domain constants shared with the core crate
pub mod constants;
/// Unified error handling with standard error codes
pub mod errors;
/// Output formatting: fixed-point numbers, display dates, CSV export
pub mod formatters;
/// Statistics and aggregation engine
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Data models for daily entries, targets, and cycles
pub mod models;
