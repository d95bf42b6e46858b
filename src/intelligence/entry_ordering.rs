// ABOUTME: Entry ordering for the history table and for chronological statistics input
// ABOUTME: Stable sorts by date, nutrient, deficit, or drinks with untracked drinks kept last
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::nutrition_calculator::compute_daily_deficit;
use crate::errors::AppError;
use crate::models::{DailyEntry, Nutrient};

/// Column to order entries by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Entry date
    #[default]
    Date,
    /// A raw nutrient
    Nutrient(Nutrient),
    /// Daily deficit against the caller's baseline
    Deficit,
    /// Drink count; untracked days sort last
    Drinks,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => f.write_str("date"),
            Self::Nutrient(nutrient) => write!(f, "{nutrient}"),
            Self::Deficit => f.write_str("deficit"),
            Self::Drinks => f.write_str("drinks"),
        }
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "deficit" => Ok(Self::Deficit),
            "drinks" => Ok(Self::Drinks),
            other => other
                .parse::<Nutrient>()
                .map(Self::Nutrient)
                .map_err(|_| AppError::invalid_format(format!("unknown sort column '{s}'"))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest first
    #[default]
    Desc,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(AppError::invalid_format(format!(
                "sort direction '{other}' must be asc or desc"
            ))),
        }
    }
}

fn compare_entries(
    a: &DailyEntry,
    b: &DailyEntry,
    key: SortKey,
    direction: SortDirection,
    default_calories: f64,
) -> Ordering {
    match key {
        SortKey::Date => direction.apply(a.date.cmp(&b.date)),
        SortKey::Nutrient(nutrient) => {
            direction.apply(a.value(nutrient).total_cmp(&b.value(nutrient)))
        }
        SortKey::Deficit => direction.apply(
            compute_daily_deficit(a, default_calories)
                .total_cmp(&compute_daily_deficit(b, default_calories)),
        ),
        SortKey::Drinks => match (a.drinks.tracked_value(), b.drinks.tracked_value()) {
            (Some(x), Some(y)) => direction.apply(x.total_cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Entries sorted by `key` in `direction`; ties keep their input order
#[must_use]
pub fn sort_entries(
    entries: &[DailyEntry],
    key: SortKey,
    direction: SortDirection,
    default_calories: f64,
) -> Vec<DailyEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| compare_entries(a, b, key, direction, default_calories));
    sorted
}

/// Entries oldest first
#[must_use]
pub fn order_chronologically(entries: &[DailyEntry]) -> Vec<DailyEntry> {
    sort_entries(entries, SortKey::Date, SortDirection::Asc, 0.0)
}

/// Table header click state
///
/// Clicking a new column sorts it descending, clicking the same column again
/// flips the direction, and the third click on a column returns to the
/// default date-descending order.
#[derive(Debug, Clone, Default)]
pub struct TableSortState {
    key: SortKey,
    direction: SortDirection,
    clicks: HashMap<SortKey, u32>,
}

impl TableSortState {
    /// Current column
    #[must_use]
    pub const fn key(&self) -> SortKey {
        self.key
    }

    /// Current direction
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Register a header click on `key`
    pub fn click(&mut self, key: SortKey) {
        let count = self.clicks.get(&key).copied().unwrap_or(0) + 1;
        if count == 3 {
            self.key = SortKey::Date;
            self.direction = SortDirection::Desc;
            self.clicks.insert(key, 0);
            return;
        }

        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Desc;
        }
        self.clicks.insert(key, count);
    }

    /// Sort `entries` by the current column and direction
    #[must_use]
    pub fn apply(&self, entries: &[DailyEntry], default_calories: f64) -> Vec<DailyEntry> {
        sort_entries(entries, self.key, self.direction, default_calories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("date".parse::<SortKey>().unwrap(), SortKey::Date);
        assert_eq!(
            "protein".parse::<SortKey>().unwrap(),
            SortKey::Nutrient(Nutrient::Protein)
        );
        assert_eq!("Deficit".parse::<SortKey>().unwrap(), SortKey::Deficit);
        assert!("weight".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_click_cycle_returns_to_date_desc() {
        let mut state = TableSortState::default();
        let fat = SortKey::Nutrient(Nutrient::Fat);

        state.click(fat);
        assert_eq!((state.key(), state.direction()), (fat, SortDirection::Desc));
        state.click(fat);
        assert_eq!((state.key(), state.direction()), (fat, SortDirection::Asc));
        state.click(fat);
        assert_eq!(
            (state.key(), state.direction()),
            (SortKey::Date, SortDirection::Desc)
        );
        state.click(fat);
        assert_eq!((state.key(), state.direction()), (fat, SortDirection::Desc));
    }
}
