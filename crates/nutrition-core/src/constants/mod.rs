// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Drink targets, trend thresholds, energy conversions, and default nutrient targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Values that users can tune are
//! only defaults here; the engine configuration overrides them.

/// Service identity used in structured logs
pub mod service_names {
    /// Library/service name reported in log records
    pub const NUTRITION_STATS: &str = "nutrition-stats";
    /// CLI binary name
    pub const NUTRITION_CLI: &str = "nutrition-cli";
}

/// Alcohol tracking defaults
pub mod drinks {
    /// Maximum drinks per drinking day before the daily flag is raised
    pub const DAILY_DRINK_TARGET: f64 = 4.0;
    /// Maximum drinks in the trailing window before the weekly flag is raised
    pub const WEEKLY_DRINK_TARGET: f64 = 15.0;
    /// Length of one rolling drink window in days
    pub const DRINK_WINDOW_DAYS: i64 = 7;
}

/// Trend classification thresholds
pub mod trends {
    /// Minimum magnitude for a nutrient slope or median shift to count as a trend
    pub const NUTRIENT_TREND_THRESHOLD: f64 = 0.1;
    /// Minimum magnitude for a deficit slope or median shift (larger scale)
    pub const DEFICIT_TREND_THRESHOLD: f64 = 1.0;
    /// Fewer entries than this always classify as stable
    pub const MIN_TREND_ENTRIES: usize = 2;
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein kcal per gram
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Carbohydrate kcal per gram
    pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
    /// Fat kcal per gram
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
}

/// Default per-user nutrient targets for a fresh account
pub mod default_targets {
    /// Daily calorie intake target; also the default burn baseline
    pub const CALORIES: f64 = 2000.0;
    /// Carbohydrates (g)
    pub const CARBS: f64 = 250.0;
    /// Sugar (g)
    pub const SUGAR: f64 = 50.0;
    /// Protein (g)
    pub const PROTEIN: f64 = 150.0;
    /// Fiber (g)
    pub const FIBER: f64 = 30.0;
    /// Fat (g)
    pub const FAT: f64 = 65.0;
    /// Sodium (mg)
    pub const SODIUM: f64 = 2300.0;
    /// Target daily calorie deficit
    pub const DEFICIT: f64 = 500.0;
    /// Max daily drinks
    pub const DRINKS: f64 = super::drinks::DAILY_DRINK_TARGET;
}

/// Date formats
pub mod dates {
    /// Storage format of entry dates (`YYYY-MM-DD`)
    pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// CSV export layout
pub mod export {
    /// First header cell of the summary block
    pub const SUMMARY_HEADER: &str = "Statistic";
    /// Label of the averages row
    pub const AVERAGES_LABEL: &str = "Averages";
    /// Label of the medians row
    pub const MEDIANS_LABEL: &str = "Medians";
    /// First header cell of the per-day block
    pub const DATA_HEADER: &str = "Date";
    /// Prefix of the downloadable export file name
    pub const FILE_NAME_PREFIX: &str = "nutrition-data-";
}
