// ABOUTME: Integration tests for the statistics engine
// ABOUTME: Validates mean, median, regression slope, and split-half medians over daily entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, entry};
use nutrition_stats::intelligence::StatisticalAnalyzer;
use nutrition_stats::models::{DailyEntry, Nutrient};

fn protein_series(days: &[(&str, f64)]) -> Vec<DailyEntry> {
    days.iter()
        .map(|(day, protein)| entry(day).protein(*protein).build())
        .collect()
}

fn protein(entry: &DailyEntry) -> f64 {
    entry.value(Nutrient::Protein)
}

#[test]
fn test_average_and_median_of_empty_input_are_zero() {
    assert!(StatisticalAnalyzer::average(&[]).abs() < f64::EPSILON);
    assert!(StatisticalAnalyzer::median(&[]).abs() < f64::EPSILON);
    assert!(StatisticalAnalyzer::average_by(&[], protein).abs() < f64::EPSILON);
}

#[test]
fn test_median_ignores_input_order() {
    let entries = protein_series(&[
        ("2025-11-01", 140.0),
        ("2025-11-02", 100.0),
        ("2025-11-03", 120.0),
        ("2025-11-04", 160.0),
    ]);
    assert!((StatisticalAnalyzer::median_by(&entries, protein) - 130.0).abs() < 1e-9);
    assert!((StatisticalAnalyzer::average_by(&entries, protein) - 130.0).abs() < 1e-9);
}

#[test]
fn test_regression_slope_perfect_increase() {
    common::init_test_logging();
    let entries = protein_series(&[
        ("2025-11-01", 1.0),
        ("2025-11-02", 2.0),
        ("2025-11-03", 3.0),
        ("2025-11-04", 4.0),
        ("2025-11-05", 5.0),
    ]);
    let slope = StatisticalAnalyzer::linear_regression_slope(&entries, protein);
    assert!((slope - 1.0).abs() < 1e-9);
}

#[test]
fn test_regression_slope_is_per_day_across_gaps() {
    let entries = protein_series(&[
        ("2025-11-01", 0.0),
        ("2025-11-03", 4.0),
        ("2025-11-05", 8.0),
    ]);
    let slope = StatisticalAnalyzer::linear_regression_slope(&entries, protein);
    assert!((slope - 2.0).abs() < 1e-9);
}

#[test]
fn test_regression_slope_does_not_depend_on_entry_order() {
    let mut entries = protein_series(&[
        ("2025-11-01", 150.0),
        ("2025-11-02", 140.0),
        ("2025-11-04", 120.0),
        ("2025-11-05", 90.0),
    ]);
    let forward = StatisticalAnalyzer::linear_regression_slope(&entries, protein);
    entries.reverse();
    let backward = StatisticalAnalyzer::linear_regression_slope(&entries, protein);

    assert!(forward < 0.0);
    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn test_regression_slope_degenerate_inputs_are_zero() {
    let single = protein_series(&[("2025-11-01", 100.0)]);
    assert!(StatisticalAnalyzer::linear_regression_slope(&single, protein).abs() < f64::EPSILON);

    let same_day = vec![
        entry("2025-11-01").protein(100.0).build(),
        entry("2025-11-01").protein(200.0).build(),
    ];
    assert!(
        StatisticalAnalyzer::linear_regression_slope(&same_day, protein).abs() < f64::EPSILON
    );

    assert!(StatisticalAnalyzer::linear_regression_slope(&[], protein).abs() < f64::EPSILON);
}

#[test]
fn test_least_squares_slope_on_points() {
    let points = [(0.0, 10.0), (1.0, 8.0), (2.0, 6.0), (3.0, 4.0)];
    assert!((StatisticalAnalyzer::least_squares_slope(&points) + 2.0).abs() < 1e-9);
    assert!(StatisticalAnalyzer::least_squares_slope(&[(1.0, 5.0)]).abs() < f64::EPSILON);
}

#[test]
fn test_split_half_medians_sorts_before_bisecting() {
    let halves = StatisticalAnalyzer::split_half_medians(&[5.0, 1.0, 4.0, 2.0]);
    assert!((halves.first_half - 1.5).abs() < 1e-9);
    assert!((halves.second_half - 4.5).abs() < 1e-9);
    assert!((halves.shift() - 3.0).abs() < 1e-9);
}

#[test]
fn test_split_half_medians_odd_count_puts_middle_in_second_half() {
    let halves = StatisticalAnalyzer::split_half_medians(&[3.0, 1.0, 2.0]);
    assert!((halves.first_half - 1.0).abs() < 1e-9);
    assert!((halves.second_half - 2.5).abs() < 1e-9);
}

#[test]
fn test_split_half_medians_needs_two_values() {
    let halves = StatisticalAnalyzer::split_half_medians(&[7.0]);
    assert!(halves.first_half.abs() < f64::EPSILON);
    assert!(halves.second_half.abs() < f64::EPSILON);
}

#[test]
fn test_nan_quantities_read_as_zero() {
    let entries = vec![
        entry("2025-11-01").protein(f64::NAN).build(),
        entry("2025-11-02").protein(100.0).build(),
    ];
    assert!((StatisticalAnalyzer::average_by(&entries, protein) - 50.0).abs() < 1e-9);
    assert_eq!(entries[0].date, date("2025-11-01"));
}
