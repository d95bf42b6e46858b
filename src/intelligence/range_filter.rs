// ABOUTME: Range filtering of entries by recency or by excluding the latest logged day
// ABOUTME: Implements the prev/all/3/7/30 views and the reference date used for the prev view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use tracing::debug;

use super::dates::{days_before, local_today};
use crate::models::{DailyEntry, RangeFilter};

/// Entries visible under `range`, with day ranges counted back from today's local date
#[must_use]
pub fn filter_by_range(entries: &[DailyEntry], range: RangeFilter) -> Vec<DailyEntry> {
    filter_by_range_at(entries, range, local_today())
}

/// Entries visible under `range`, with day ranges counted back from `today`
///
/// - `all` keeps everything.
/// - `prev` drops every entry on the latest date; 0 or 1 entries give nothing.
/// - `3`, `7`, `30` keep entries dated on or after `today - N days`,
///   future dates included.
///
/// Input order is preserved.
#[must_use]
pub fn filter_by_range_at(
    entries: &[DailyEntry],
    range: RangeFilter,
    today: NaiveDate,
) -> Vec<DailyEntry> {
    let filtered: Vec<DailyEntry> = match range {
        RangeFilter::All => entries.to_vec(),
        RangeFilter::Previous => {
            if entries.len() <= 1 {
                return Vec::new();
            }
            match entries.iter().map(|entry| entry.date).max() {
                Some(latest) => entries
                    .iter()
                    .filter(|entry| entry.date != latest)
                    .cloned()
                    .collect(),
                None => Vec::new(),
            }
        }
        RangeFilter::Last3Days | RangeFilter::Last7Days | RangeFilter::Last30Days => {
            let cutoff = days_before(today, range.days().unwrap_or(0));
            entries
                .iter()
                .filter(|entry| entry.date >= cutoff)
                .cloned()
                .collect()
        }
    };

    debug!(
        range = %range,
        total = entries.len(),
        kept = filtered.len(),
        "Applied range filter"
    );
    filtered
}

/// Anchor date for rolling drink windows under `range`
///
/// For `prev` with remaining entries this is the latest remaining date, so the
/// windows end on the day before the excluded one. Otherwise `None`, and
/// callers use today's date.
#[must_use]
pub fn range_reference_date(filtered: &[DailyEntry], range: RangeFilter) -> Option<NaiveDate> {
    match range {
        RangeFilter::Previous => filtered.iter().map(|entry| entry.date).max(),
        RangeFilter::All
        | RangeFilter::Last3Days
        | RangeFilter::Last7Days
        | RangeFilter::Last30Days => None,
    }
}
