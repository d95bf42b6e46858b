// ABOUTME: Logging cycle model and the scope selector that narrows history to one cycle
// ABOUTME: LoggingCycle and CycleScope definitions with tag parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Named logging period grouping a run of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingCycle {
    /// Opaque identifier assigned by the storage layer
    pub id: String,
    /// Owning user
    #[serde(default, alias = "uid")]
    pub owner_id: String,
    /// Display name
    pub name: String,
    /// Creation timestamp; newer cycles list first
    pub created_at: DateTime<Utc>,
}

/// Which cycle's entries the dashboard is looking at
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CycleScope {
    /// Every entry regardless of cycle
    #[default]
    All,
    /// Entries of the user's active cycle
    Active,
    /// Entries that belong to no cycle
    Legacy,
    /// Entries of one specific cycle
    Cycle(String),
}

impl CycleScope {
    const CYCLE_PREFIX: &'static str = "cycle:";

    /// Initial scope for a user: their active cycle when one is set
    #[must_use]
    pub const fn initial(active_cycle_id: Option<&str>) -> Self {
        if active_cycle_id.is_some() {
            Self::Active
        } else {
            Self::All
        }
    }

    /// Cycle id this scope points at, resolving `Active` against the user's settings
    #[must_use]
    pub fn selected_cycle_id<'a>(&'a self, active_cycle_id: Option<&'a str>) -> Option<&'a str> {
        match self {
            Self::Cycle(id) => Some(id.as_str()),
            Self::Active => active_cycle_id,
            Self::All | Self::Legacy => None,
        }
    }
}

impl fmt::Display for CycleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Active => f.write_str("active"),
            Self::Legacy => f.write_str("legacy"),
            Self::Cycle(id) => write!(f, "{}{id}", Self::CYCLE_PREFIX),
        }
    }
}

impl FromStr for CycleScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "legacy" => Ok(Self::Legacy),
            other => match other.strip_prefix(Self::CYCLE_PREFIX) {
                Some(id) if !id.is_empty() => Ok(Self::Cycle(id.to_owned())),
                _ => Err(AppError::invalid_format(format!(
                    "scope '{other}' must be all, active, legacy, or cycle:<id>"
                ))),
            },
        }
    }
}

impl TryFrom<String> for CycleScope {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CycleScope> for String {
    fn from(value: CycleScope) -> Self {
        value.to_string()
    }
}
