// ABOUTME: Trend classification and per-nutrient summaries for the dashboard trend cards
// ABOUTME: Combines regression slope and split-half median shift into up/down/stable signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::nutrition_calculator::compute_daily_deficit;
use super::statistical_analysis::StatisticalAnalyzer;
use crate::config::TrendConfig;
use crate::constants::trends::MIN_TREND_ENTRIES;
use crate::models::{DailyEntry, Nutrient, NutrientTargets};

/// Direction of change of a statistic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Increasing by at least the threshold
    Up,
    /// Decreasing by at least the threshold
    Down,
    /// Magnitude below the threshold
    #[default]
    Stable,
}

impl TrendDirection {
    /// Classify a signed statistic against a threshold
    ///
    /// `stable` when `|value| < threshold`, otherwise the sign decides.
    /// NaN is `stable`.
    #[must_use]
    pub fn classify(value: f64, threshold: f64) -> Self {
        if value.is_nan() || value.abs() < threshold {
            Self::Stable
        } else if value > 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Stable => f.write_str("stable"),
        }
    }
}

/// Trend of one quantity, from the regression slope and the split-half median shift
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    /// Direction of the regression slope
    pub avg_trend: TrendDirection,
    /// Direction of the second-half median minus the first-half median
    pub med_trend: TrendDirection,
}

/// Classify a signed statistic against a threshold
#[must_use]
pub fn trend_direction(value: f64, threshold: f64) -> TrendDirection {
    TrendDirection::classify(value, threshold)
}

/// Trend of an arbitrary per-entry quantity
#[must_use]
pub fn compute_trend_by<F>(entries: &[DailyEntry], selector: F, threshold: f64) -> TrendResult
where
    F: Fn(&DailyEntry) -> f64,
{
    if entries.len() < MIN_TREND_ENTRIES {
        return TrendResult::default();
    }

    let slope = StatisticalAnalyzer::linear_regression_slope(entries, &selector);
    let values: Vec<f64> = entries.iter().map(&selector).collect();
    let halves = StatisticalAnalyzer::split_half_medians(&values);

    TrendResult {
        avg_trend: TrendDirection::classify(slope, threshold),
        med_trend: TrendDirection::classify(halves.shift(), threshold),
    }
}

/// Trend of one nutrient with the nutrient threshold
#[must_use]
pub fn compute_trend(
    entries: &[DailyEntry],
    nutrient: Nutrient,
    config: &TrendConfig,
) -> TrendResult {
    compute_trend_by(
        entries,
        |entry| entry.value(nutrient),
        config.nutrient_threshold,
    )
}

/// Trend of the daily deficit with the deficit threshold
#[must_use]
pub fn compute_deficit_trend(
    entries: &[DailyEntry],
    default_calories: f64,
    config: &TrendConfig,
) -> TrendResult {
    compute_trend_by(
        entries,
        |entry| compute_daily_deficit(entry, default_calories),
        config.deficit_threshold,
    )
}

/// Quantity shown on a trend card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryMetric {
    /// A raw nutrient
    Nutrient(Nutrient),
    /// Daily calorie deficit
    Deficit,
}

impl SummaryMetric {
    /// Card order: calories, deficit, then the macros and sodium
    pub const CARD_ORDER: [Self; 8] = [
        Self::Nutrient(Nutrient::Calories),
        Self::Deficit,
        Self::Nutrient(Nutrient::Carbs),
        Self::Nutrient(Nutrient::Sugar),
        Self::Nutrient(Nutrient::Protein),
        Self::Nutrient(Nutrient::Fiber),
        Self::Nutrient(Nutrient::Fat),
        Self::Nutrient(Nutrient::Sodium),
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nutrient(nutrient) => nutrient.label(),
            Self::Deficit => "Deficit",
        }
    }

    /// Display unit suffix
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Nutrient(nutrient) => nutrient.unit(),
            Self::Deficit => "",
        }
    }

    /// Goal value for this metric
    #[must_use]
    pub fn target(self, targets: &NutrientTargets) -> Option<f64> {
        match self {
            Self::Nutrient(nutrient) => targets.for_nutrient(nutrient),
            Self::Deficit => Some(targets.deficit),
        }
    }
}

/// Average, median, trend, and goal for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientSummary {
    /// Summarized quantity
    pub metric: SummaryMetric,
    /// Display label
    pub label: String,
    /// Display unit suffix
    pub unit: String,
    /// Mean over the entries
    pub average: f64,
    /// Median over the entries
    pub median: f64,
    /// Slope and median-shift trend
    pub trend: TrendResult,
    /// User goal, when one exists
    pub target: Option<f64>,
}

/// Summaries for every trend card, in card order
///
/// The deficit card uses `targets.calories` as the burn baseline. Empty input
/// yields no cards.
#[must_use]
pub fn summarize_nutrients(
    entries: &[DailyEntry],
    targets: &NutrientTargets,
    config: &TrendConfig,
) -> Vec<NutrientSummary> {
    if entries.is_empty() {
        return Vec::new();
    }

    let summaries: Vec<NutrientSummary> = SummaryMetric::CARD_ORDER
        .iter()
        .map(|&metric| {
            let (average, median, trend) = match metric {
                SummaryMetric::Nutrient(nutrient) => (
                    StatisticalAnalyzer::average_by(entries, |e| e.value(nutrient)),
                    StatisticalAnalyzer::median_by(entries, |e| e.value(nutrient)),
                    compute_trend(entries, nutrient, config),
                ),
                SummaryMetric::Deficit => (
                    StatisticalAnalyzer::average_by(entries, |e| {
                        compute_daily_deficit(e, targets.calories)
                    }),
                    StatisticalAnalyzer::median_by(entries, |e| {
                        compute_daily_deficit(e, targets.calories)
                    }),
                    compute_deficit_trend(entries, targets.calories, config),
                ),
            };

            NutrientSummary {
                metric,
                label: metric.label().to_owned(),
                unit: metric.unit().to_owned(),
                average,
                median,
                trend,
                target: metric.target(targets),
            }
        })
        .collect();

    debug!(
        entries = entries.len(),
        cards = summaries.len(),
        "Summarized nutrient trends"
    );
    summaries
}
