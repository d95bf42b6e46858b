// ABOUTME: Human-readable rendering of entry dates, drink summaries, and export file names
// ABOUTME: Long-form dates with ordinal days and the drinks summary lines of the history table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};

use super::numeric::{format_plain_number, to_fixed};
use crate::constants::export::FILE_NAME_PREFIX;
use crate::intelligence::dates::{format_entry_date, parse_entry_date};
use crate::intelligence::{DrinkStats, MacroPercentages};

/// Ordinal suffix for a day of the month
#[must_use]
pub const fn day_suffix(day: u32) -> &'static str {
    if day >= 11 && day <= 13 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Long-form date such as `Thu. Nov. 20th, 2025`
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}. {}. {}{}, {}",
        date.format("%a"),
        date.format("%b"),
        date.day(),
        day_suffix(date.day()),
        date.year()
    )
}

/// Render a `YYYY-MM-DD` string as a long-form date; unparseable input comes back unchanged
#[must_use]
pub fn format_display_date(value: &str) -> String {
    parse_entry_date(value).map_or_else(|_| value.to_owned(), format_long_date)
}

/// Summary lines shown under the drinks column
///
/// The historical line only appears once a complete window exists.
#[must_use]
pub fn drink_summary_lines(stats: &DrinkStats) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Daily: {} avg / {} med",
            to_fixed(stats.daily_avg, 1),
            to_fixed(stats.daily_median, 1)
        ),
        format!(
            "Last 7 days: {}",
            format_plain_number(stats.current_week_total)
        ),
    ];
    if stats.has_complete_weeks {
        lines.push(format!(
            "Historical: {} avg / {} med",
            to_fixed(stats.weekly_avg_total, 1),
            to_fixed(stats.weekly_median_total, 1)
        ));
    }
    lines
}

/// One-line macro energy split (`Protein 30.0% / Carbs 45.0% / Fat 25.0%`)
#[must_use]
pub fn macro_split_line(split: &MacroPercentages) -> String {
    format!(
        "Protein {}% / Carbs {}% / Fat {}%",
        to_fixed(split.protein_percent, 1),
        to_fixed(split.carbs_percent, 1),
        to_fixed(split.fat_percent, 1)
    )
}

/// Default file name for a CSV export created on `date`
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{FILE_NAME_PREFIX}{}.csv", format_entry_date(date))
}
