// ABOUTME: CSV export of daily entries with a leading block of average and median statistics
// ABOUTME: Writes the summary block, a blank separator line, and one raw row per entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! CSV export
//!
//! Layout:
//!
//! ```text
//! Statistic,calories,caloriesBurned,carbs,sugar,protein,fiber,fat,sodium,deficit,drinks
//! Averages,<one decimal per column>
//! Medians,<one decimal per column>
//!
//! Date,calories,caloriesBurned,carbs,sugar,protein,fiber,fat,sodium,deficit,drinks
//! <one row per entry, in input order>
//! ```
//!
//! Deficits use `targets.calories` as the burn baseline and the surplus
//! convention of [`format_signed_deficit`]. The drinks statistics cover
//! tracked entries only, logged zeros included. Data rows hold the stored
//! numbers unrounded and leave drinks blank when untracked.

use std::iter;

use csv::{Terminator, Writer, WriterBuilder};
use tracing::debug;

use super::numeric::{format_plain_number, format_signed_deficit, to_fixed};
use crate::constants::export::{AVERAGES_LABEL, DATA_HEADER, MEDIANS_LABEL, SUMMARY_HEADER};
use crate::errors::{AppError, AppResult};
use crate::intelligence::dates::format_entry_date;
use crate::intelligence::drink_analysis::filter_tracked_drinks;
use crate::intelligence::nutrition_calculator::compute_daily_deficit;
use crate::intelligence::statistical_analysis::StatisticalAnalyzer;
use crate::models::{DailyEntry, Nutrient, NutrientTargets};

/// Column of the export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportColumn {
    /// A raw nutrient
    Nutrient(Nutrient),
    /// Daily deficit
    Deficit,
    /// Drink count
    Drinks,
}

impl ExportColumn {
    /// Every column in file order
    pub const ALL: [Self; 10] = [
        Self::Nutrient(Nutrient::Calories),
        Self::Nutrient(Nutrient::CaloriesBurned),
        Self::Nutrient(Nutrient::Carbs),
        Self::Nutrient(Nutrient::Sugar),
        Self::Nutrient(Nutrient::Protein),
        Self::Nutrient(Nutrient::Fiber),
        Self::Nutrient(Nutrient::Fat),
        Self::Nutrient(Nutrient::Sodium),
        Self::Deficit,
        Self::Drinks,
    ];

    /// Header cell
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Nutrient(nutrient) => nutrient.wire_name(),
            Self::Deficit => "deficit",
            Self::Drinks => "drinks",
        }
    }
}

/// Average and median of one export column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStatistics {
    /// Column the values describe
    pub column: ExportColumn,
    /// Mean
    pub average: f64,
    /// Median
    pub median: f64,
}

/// Average and median of every export column
#[must_use]
pub fn column_statistics(
    entries: &[DailyEntry],
    targets: &NutrientTargets,
) -> Vec<ColumnStatistics> {
    let tracked_drinks: Vec<f64> = filter_tracked_drinks(entries)
        .iter()
        .filter_map(|entry| entry.drinks.tracked_value())
        .collect();

    ExportColumn::ALL
        .iter()
        .map(|&column| {
            let (average, median) = match column {
                ExportColumn::Nutrient(nutrient) => (
                    StatisticalAnalyzer::average_by(entries, |e| e.value(nutrient)),
                    StatisticalAnalyzer::median_by(entries, |e| e.value(nutrient)),
                ),
                ExportColumn::Deficit => (
                    StatisticalAnalyzer::average_by(entries, |e| {
                        compute_daily_deficit(e, targets.calories)
                    }),
                    StatisticalAnalyzer::median_by(entries, |e| {
                        compute_daily_deficit(e, targets.calories)
                    }),
                ),
                ExportColumn::Drinks => (
                    StatisticalAnalyzer::average(&tracked_drinks),
                    StatisticalAnalyzer::median(&tracked_drinks),
                ),
            };
            ColumnStatistics {
                column,
                average,
                median,
            }
        })
        .collect()
}

fn format_statistic(column: ExportColumn, value: f64) -> String {
    match column {
        ExportColumn::Deficit => format_signed_deficit(value, 1),
        ExportColumn::Nutrient(_) | ExportColumn::Drinks => to_fixed(value, 1),
    }
}

fn header_record(first: &str) -> Vec<&str> {
    iter::once(first)
        .chain(ExportColumn::ALL.iter().map(|column| column.header()))
        .collect()
}

fn summary_record(label: &str, values: impl Iterator<Item = String>) -> Vec<String> {
    iter::once(label.to_owned()).chain(values).collect()
}

fn entry_record(entry: &DailyEntry, default_calories: f64) -> Vec<String> {
    let mut record = Vec::with_capacity(ExportColumn::ALL.len() + 1);
    record.push(format_entry_date(entry.date));
    for column in ExportColumn::ALL {
        record.push(match column {
            ExportColumn::Nutrient(nutrient) => format_plain_number(entry.value(nutrient)),
            ExportColumn::Deficit => {
                format_signed_deficit(compute_daily_deficit(entry, default_calories), 1)
            }
            ExportColumn::Drinks => entry
                .drinks
                .tracked_value()
                .map_or_else(String::new, format_plain_number),
        });
    }
    record
}

fn csv_error(error: csv::Error) -> AppError {
    AppError::serialization(format!("CSV error: {error}")).with_source(error)
}

fn writer_for(buffer: Vec<u8>) -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer)
}

fn finish(writer: Writer<Vec<u8>>) -> AppResult<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| AppError::serialization(format!("CSV flush failed: {e}")))
}

/// Serialize entries and their summary statistics to CSV text
///
/// # Errors
///
/// Returns a `SerializationError` if the CSV writer fails
pub fn export_to_csv(entries: &[DailyEntry], targets: &NutrientTargets) -> AppResult<String> {
    let statistics = column_statistics(entries, targets);

    let mut summary = writer_for(Vec::new());
    summary
        .write_record(header_record(SUMMARY_HEADER))
        .map_err(csv_error)?;
    summary
        .write_record(summary_record(
            AVERAGES_LABEL,
            statistics
                .iter()
                .map(|stat| format_statistic(stat.column, stat.average)),
        ))
        .map_err(csv_error)?;
    summary
        .write_record(summary_record(
            MEDIANS_LABEL,
            statistics
                .iter()
                .map(|stat| format_statistic(stat.column, stat.median)),
        ))
        .map_err(csv_error)?;

    let mut buffer = finish(summary)?;
    buffer.push(b'\n');

    let mut rows = writer_for(buffer);
    rows.write_record(header_record(DATA_HEADER))
        .map_err(csv_error)?;
    for entry in entries {
        rows.write_record(entry_record(entry, targets.calories))
            .map_err(csv_error)?;
    }

    let output = String::from_utf8(finish(rows)?)
        .map_err(|e| AppError::serialization(format!("CSV output is not UTF-8: {e}")))?;

    debug!(
        entries = entries.len(),
        bytes = output.len(),
        "Exported entries to CSV"
    );
    Ok(output)
}
