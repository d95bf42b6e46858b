// ABOUTME: Core data models for daily nutrition tracking
// ABOUTME: Re-exports entry, target, cycle, range, and settings types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models consumed by the statistics engine.
//!
//! All entities are owned by the storage collaborator; the engine only reads
//! them and derives new values.

/// Logging cycles and cycle scope selection
pub mod cycle;
/// Daily entries, drink counts, and nutrient selectors
pub mod entry;
/// Range filter tags
pub mod range;
/// User settings and device preferences
pub mod settings;
/// Per-user nutrient goals
pub mod targets;

pub use cycle::{CycleScope, LoggingCycle};
pub use entry::{value_or_zero, DailyEntry, DailyEntryBuilder, DrinkCount, Nutrient};
pub use range::RangeFilter;
pub use settings::{Preferences, Theme, UserSettings};
pub use targets::NutrientTargets;
