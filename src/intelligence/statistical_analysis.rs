// ABOUTME: Aggregate statistics over daily entries: mean, median, regression slope, split-half medians
// ABOUTME: Every statistic is total and falls back to zero on empty or degenerate input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: entry counts and day offsets are far below 2^52

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dates::days_between;
use crate::models::DailyEntry;

/// Medians of the lower and upper halves of a sorted value set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitHalfMedians {
    /// Median of the lower half
    pub first_half: f64,
    /// Median of the upper half
    pub second_half: f64,
}

impl SplitHalfMedians {
    /// Second half minus first half
    #[must_use]
    pub fn shift(&self) -> f64 {
        self.second_half - self.first_half
    }
}

/// Statistics engine for per-day entry values
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean; 0 for empty input
    #[must_use]
    pub fn average(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Median of the values; mean of the two middle values for even counts, 0 for empty input
    #[must_use]
    pub fn median(values: &[f64]) -> f64 {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::median_of_sorted(&sorted)
    }

    fn median_of_sorted(sorted: &[f64]) -> f64 {
        let len = sorted.len();
        if len == 0 {
            return 0.0;
        }
        if len % 2 == 0 {
            (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
        } else {
            sorted[len / 2]
        }
    }

    /// Mean of `selector` over the entries
    #[must_use]
    pub fn average_by<F>(entries: &[DailyEntry], selector: F) -> f64
    where
        F: Fn(&DailyEntry) -> f64,
    {
        let values: Vec<f64> = entries.iter().map(selector).collect();
        Self::average(&values)
    }

    /// Median of `selector` over the entries
    #[must_use]
    pub fn median_by<F>(entries: &[DailyEntry], selector: F) -> f64
    where
        F: Fn(&DailyEntry) -> f64,
    {
        let values: Vec<f64> = entries.iter().map(selector).collect();
        Self::median(&values)
    }

    /// Ordinary least squares slope of `(x, y)` points
    ///
    /// Returns 0 for fewer than two points or when every `x` is identical.
    #[must_use]
    pub fn least_squares_slope(points: &[(f64, f64)]) -> f64 {
        if points.len() < 2 {
            return 0.0;
        }

        let n = points.len() as f64;
        let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
        let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
        let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
        let sum_xx: f64 = points.iter().map(|(x, _)| x * x).sum();

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        if !denominator.is_finite() || denominator.abs() < f64::EPSILON {
            return 0.0;
        }

        let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
        if slope.is_finite() {
            slope
        } else {
            0.0
        }
    }

    /// Regression slope of `selector` against each entry's day offset from the earliest entry
    ///
    /// The result is the change per day. It does not depend on the order of
    /// `entries`, only on their dates.
    #[must_use]
    pub fn linear_regression_slope<F>(entries: &[DailyEntry], selector: F) -> f64
    where
        F: Fn(&DailyEntry) -> f64,
    {
        let Some(first_date) = entries.iter().map(|entry| entry.date).min() else {
            return 0.0;
        };

        let points: Vec<(f64, f64)> = entries
            .iter()
            .map(|entry| {
                (
                    days_between(first_date, entry.date) as f64,
                    selector(entry),
                )
            })
            .collect();

        let slope = Self::least_squares_slope(&points);
        debug!(points = points.len(), slope, "Computed regression slope");
        slope
    }

    /// Sort the values ascending, bisect at half the length, and take the median of each half
    ///
    /// Fewer than two values yield zero for both halves.
    #[must_use]
    pub fn split_half_medians(values: &[f64]) -> SplitHalfMedians {
        if values.len() < 2 {
            return SplitHalfMedians::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let (first, second) = sorted.split_at(sorted.len() / 2);

        SplitHalfMedians {
            first_half: Self::median_of_sorted(first),
            second_half: Self::median_of_sorted(second),
        }
    }
}
