// ABOUTME: Output formatting for numbers, dates, CSV exports, and structured output
// ABOUTME: Selects between human-readable text and JSON for CLI and caller-facing output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Formatting
//!
//! - [`numeric`]: fixed-point numbers and the surplus-sign deficit rule
//! - [`display`]: long-form dates, drink summary lines, export file names
//! - [`csv_export`]: the CSV file produced for download
//!
//! Structured results (summaries, drink statistics) can also be rendered as
//! JSON through [`format_output`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// CSV export of entries and summary statistics
pub mod csv_export;
/// Human-readable dates and summary lines
pub mod display;
/// Number rendering
pub mod numeric;

pub use csv_export::{column_statistics, export_to_csv, ColumnStatistics, ExportColumn};
pub use display::{
    day_suffix, drink_summary_lines, export_file_name, format_display_date, format_long_date,
    macro_split_line,
};
pub use numeric::{
    format_plain_number, format_signed_deficit, format_with_unit, to_fixed, MAX_DECIMALS,
};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_format(format!(
                "output format '{other}' must be text or json"
            ))),
        }
    }
}

/// Serialize `data` as pretty-printed JSON
///
/// # Errors
///
/// Returns a `SerializationError` if the value cannot be represented as JSON
pub fn format_output<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
