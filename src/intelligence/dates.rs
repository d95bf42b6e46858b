// ABOUTME: Calendar date helpers for entry dates and range cutoffs
// ABOUTME: Parses and formats YYYY-MM-DD dates and computes whole-day distances in local time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Entry dates are calendar days without a time zone. All arithmetic happens
//! on `NaiveDate`, so day distances are whole numbers and daylight saving
//! transitions never shift a boundary.

use chrono::{Days, Local, NaiveDate};

use crate::constants::dates::ENTRY_DATE_FORMAT;
use crate::errors::AppResult;

/// Parse a `YYYY-MM-DD` entry date
///
/// # Errors
///
/// Returns an `InvalidFormat` error if the string is not a valid calendar date
pub fn parse_entry_date(value: &str) -> AppResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), ENTRY_DATE_FORMAT)?)
}

/// Format a date as a zero-padded `YYYY-MM-DD` string
#[must_use]
pub fn format_entry_date(date: NaiveDate) -> String {
    date.format(ENTRY_DATE_FORMAT).to_string()
}

/// Today's calendar date in the local time zone
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `earlier` to `later`; negative when `later` precedes `earlier`
#[must_use]
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// The date `days` calendar days before `date`
///
/// Saturates at the earliest representable date.
#[must_use]
pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(if days >= 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}
