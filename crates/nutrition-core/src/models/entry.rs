// ABOUTME: Daily nutrition entry model with the tri-state drink count and nutrient selectors
// ABOUTME: DailyEntry, DrinkCount, Nutrient, and DailyEntryBuilder definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

/// Read a numeric quantity, treating NaN as absent (zero)
#[must_use]
pub fn value_or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Deserialize a number that may be absent or `null`, defaulting to zero
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Drinks logged for a day
///
/// Old entries predate drink tracking, so "no value" must stay distinct from
/// "logged zero drinks". Only tracked entries take part in drink statistics,
/// and only positive ones feed the daily average and median.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum DrinkCount {
    /// Field absent: the day is excluded from all drink statistics
    #[default]
    Untracked,
    /// Logged as zero drinks
    Zero,
    /// Logged with a positive number of drinks
    Positive(f64),
}

impl DrinkCount {
    /// Classify a logged count; zero, negative, and NaN counts are `Zero`
    #[must_use]
    pub fn from_count(count: f64) -> Self {
        if count > 0.0 {
            Self::Positive(count)
        } else {
            Self::Zero
        }
    }

    /// Whether the drinks field was set for this day
    #[must_use]
    pub const fn is_tracked(self) -> bool {
        !matches!(self, Self::Untracked)
    }

    /// Whether the drinks field was absent
    #[must_use]
    pub const fn is_untracked(&self) -> bool {
        matches!(self, Self::Untracked)
    }

    /// Whether at least one drink was logged
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive(_))
    }

    /// Logged count, `None` when untracked
    #[must_use]
    pub const fn tracked_value(self) -> Option<f64> {
        match self {
            Self::Untracked => None,
            Self::Zero => Some(0.0),
            Self::Positive(count) => Some(count),
        }
    }

    /// Logged count when positive
    #[must_use]
    pub const fn positive_value(self) -> Option<f64> {
        match self {
            Self::Positive(count) => Some(count),
            Self::Untracked | Self::Zero => None,
        }
    }
}

/// A JSON `null` reads the same as an absent field, so `"drinks": null` is
/// `Untracked`. Serialization never writes `null`; untracked days omit the field.
impl From<Option<f64>> for DrinkCount {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Untracked, Self::from_count)
    }
}

impl From<DrinkCount> for Option<f64> {
    fn from(value: DrinkCount) -> Self {
        value.tracked_value()
    }
}

/// One day's logged nutrition record for one user
///
/// Dates are calendar dates without a time zone. Duplicate dates are allowed
/// and simply contribute twice to every aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    /// Opaque identifier assigned by the storage layer
    #[serde(default)]
    pub id: String,
    /// Owning user; not interpreted by the engine
    #[serde(default, alias = "uid")]
    pub owner_id: String,
    /// Logging cycle this entry belongs to, `None` for legacy entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<String>,
    /// Calendar day (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Calories consumed
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: f64,
    /// Calories burned; zero falls back to the caller's baseline
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories_burned: f64,
    /// Carbohydrates (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub carbs: f64,
    /// Sugar (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub sugar: f64,
    /// Protein (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub protein: f64,
    /// Fiber (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub fiber: f64,
    /// Fat (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub fat: f64,
    /// Sodium (mg)
    #[serde(default, deserialize_with = "lenient_number")]
    pub sodium: f64,
    /// Drinks logged, if tracked
    #[serde(default, skip_serializing_if = "DrinkCount::is_untracked")]
    pub drinks: DrinkCount,
}

impl DailyEntry {
    /// Value of a nutrient, zero when unset
    #[must_use]
    pub fn value(&self, nutrient: Nutrient) -> f64 {
        let raw = match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::CaloriesBurned => self.calories_burned,
            Nutrient::Carbs => self.carbs,
            Nutrient::Sugar => self.sugar,
            Nutrient::Protein => self.protein,
            Nutrient::Fiber => self.fiber,
            Nutrient::Fat => self.fat,
            Nutrient::Sodium => self.sodium,
        };
        value_or_zero(raw)
    }

    /// Whether the entry belongs to no logging cycle
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        self.cycle_id.is_none()
    }
}

/// Raw per-day quantities stored on an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    /// Calories consumed
    Calories,
    /// Calories burned
    CaloriesBurned,
    /// Carbohydrates
    Carbs,
    /// Sugar
    Sugar,
    /// Protein
    Protein,
    /// Fiber
    Fiber,
    /// Fat
    Fat,
    /// Sodium
    Sodium,
}

impl Nutrient {
    /// All nutrients in storage/export column order
    pub const ALL: [Self; 8] = [
        Self::Calories,
        Self::CaloriesBurned,
        Self::Carbs,
        Self::Sugar,
        Self::Protein,
        Self::Fiber,
        Self::Fat,
        Self::Sodium,
    ];

    /// Field name on the wire and in CSV headers
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::CaloriesBurned => "caloriesBurned",
            Self::Carbs => "carbs",
            Self::Sugar => "sugar",
            Self::Protein => "protein",
            Self::Fiber => "fiber",
            Self::Fat => "fat",
            Self::Sodium => "sodium",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::CaloriesBurned => "Calories Burned",
            Self::Carbs => "Carbs",
            Self::Sugar => "Sugar",
            Self::Protein => "Protein",
            Self::Fiber => "Fiber",
            Self::Fat => "Fat",
            Self::Sodium => "Sodium",
        }
    }

    /// Display unit suffix
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories | Self::CaloriesBurned => "",
            Self::Carbs | Self::Sugar | Self::Protein | Self::Fiber | Self::Fat => "g",
            Self::Sodium => "mg",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Nutrient {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calories" => Ok(Self::Calories),
            "caloriesburned" | "calories_burned" => Ok(Self::CaloriesBurned),
            "carbs" => Ok(Self::Carbs),
            "sugar" => Ok(Self::Sugar),
            "protein" => Ok(Self::Protein),
            "fiber" => Ok(Self::Fiber),
            "fat" => Ok(Self::Fat),
            "sodium" => Ok(Self::Sodium),
            other => Err(AppError::invalid_format(format!(
                "unknown nutrient '{other}'"
            ))),
        }
    }
}

/// Builder for `DailyEntry`
#[derive(Debug, Clone)]
pub struct DailyEntryBuilder {
    entry: DailyEntry,
}

impl DailyEntryBuilder {
    /// Creates a builder with the required identifier and date; every quantity starts at zero
    #[must_use]
    pub fn new(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            entry: DailyEntry {
                id: id.into(),
                owner_id: String::new(),
                cycle_id: None,
                date,
                calories: 0.0,
                calories_burned: 0.0,
                carbs: 0.0,
                sugar: 0.0,
                protein: 0.0,
                fiber: 0.0,
                fat: 0.0,
                sodium: 0.0,
                drinks: DrinkCount::Untracked,
            },
        }
    }

    /// Sets the owning user
    #[must_use]
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.entry.owner_id = owner_id.into();
        self
    }

    /// Assigns the entry to a logging cycle
    #[must_use]
    pub fn cycle_id(mut self, cycle_id: impl Into<String>) -> Self {
        self.entry.cycle_id = Some(cycle_id.into());
        self
    }

    /// Sets calories consumed
    #[must_use]
    pub const fn calories(mut self, value: f64) -> Self {
        self.entry.calories = value;
        self
    }

    /// Sets calories burned
    #[must_use]
    pub const fn calories_burned(mut self, value: f64) -> Self {
        self.entry.calories_burned = value;
        self
    }

    /// Sets carbohydrates (g)
    #[must_use]
    pub const fn carbs(mut self, value: f64) -> Self {
        self.entry.carbs = value;
        self
    }

    /// Sets sugar (g)
    #[must_use]
    pub const fn sugar(mut self, value: f64) -> Self {
        self.entry.sugar = value;
        self
    }

    /// Sets protein (g)
    #[must_use]
    pub const fn protein(mut self, value: f64) -> Self {
        self.entry.protein = value;
        self
    }

    /// Sets fiber (g)
    #[must_use]
    pub const fn fiber(mut self, value: f64) -> Self {
        self.entry.fiber = value;
        self
    }

    /// Sets fat (g)
    #[must_use]
    pub const fn fat(mut self, value: f64) -> Self {
        self.entry.fat = value;
        self
    }

    /// Sets sodium (mg)
    #[must_use]
    pub const fn sodium(mut self, value: f64) -> Self {
        self.entry.sodium = value;
        self
    }

    /// Sets a single nutrient by selector
    #[must_use]
    pub const fn nutrient(mut self, nutrient: Nutrient, value: f64) -> Self {
        match nutrient {
            Nutrient::Calories => self.entry.calories = value,
            Nutrient::CaloriesBurned => self.entry.calories_burned = value,
            Nutrient::Carbs => self.entry.carbs = value,
            Nutrient::Sugar => self.entry.sugar = value,
            Nutrient::Protein => self.entry.protein = value,
            Nutrient::Fiber => self.entry.fiber = value,
            Nutrient::Fat => self.entry.fat = value,
            Nutrient::Sodium => self.entry.sodium = value,
        }
        self
    }

    /// Marks drinks as tracked with the given count
    #[must_use]
    pub fn drinks(mut self, count: f64) -> Self {
        self.entry.drinks = DrinkCount::from_count(count);
        self
    }

    /// Builds the entry
    #[must_use]
    pub fn build(self) -> DailyEntry {
        self.entry
    }
}
