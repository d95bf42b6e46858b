// ABOUTME: Configuration module for the statistics engine
// ABOUTME: Trend thresholds, drink targets, and the calorie-burn baseline with env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration.
//!
//! Configuration is a plain value passed into the functions that need it.
//! There is no process-wide instance.

/// Configuration error types
pub mod error;
/// Statistics engine configuration
pub mod stats;

pub use error::ConfigError;
pub use stats::{DrinkTargetConfig, StatsConfig, TrendConfig};
