// ABOUTME: Range filter tags selecting which slice of history the dashboard looks at
// ABOUTME: RangeFilter enum with tag parsing and the day count of each recency window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// View selector over the entry history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeFilter {
    /// Everything except the most recent date
    #[serde(rename = "prev")]
    Previous,
    /// Entire history
    #[serde(rename = "all")]
    All,
    /// Last 3 days
    #[serde(rename = "3")]
    Last3Days,
    /// Last 7 days
    #[default]
    #[serde(rename = "7")]
    Last7Days,
    /// Last 30 days
    #[serde(rename = "30")]
    Last30Days,
}

impl RangeFilter {
    /// All filters in display order
    pub const ALL: [Self; 5] = [
        Self::Previous,
        Self::All,
        Self::Last3Days,
        Self::Last7Days,
        Self::Last30Days,
    ];

    /// Tag used on the wire
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Previous => "prev",
            Self::All => "all",
            Self::Last3Days => "3",
            Self::Last7Days => "7",
            Self::Last30Days => "30",
        }
    }

    /// Length of the recency window, `None` for `prev` and `all`
    #[must_use]
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::Previous | Self::All => None,
            Self::Last3Days => Some(3),
            Self::Last7Days => Some(7),
            Self::Last30Days => Some(30),
        }
    }

    /// Button caption (`PREV`, `ALL`, `7D`, ...)
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Previous => "PREV",
            Self::All => "ALL",
            Self::Last3Days => "3D",
            Self::Last7Days => "7D",
            Self::Last30Days => "30D",
        }
    }
}

impl fmt::Display for RangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RangeFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::invalid_format(format!(
                    "range tag '{s}' is not one of prev, all, 3, 7, 30"
                ))
            })
    }
}
