// ABOUTME: Per-entry nutrition calculations: daily calorie deficit and macronutrient energy split
// ABOUTME: Applies the zero-fallback rule for missing quantities and the caller's burn baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition calculator
//!
//! Deficit is calories burned minus calories consumed. A day without a
//! logged burn (zero) uses the caller-supplied baseline instead, usually the
//! user's calorie target.
//!
//! The macro split converts average grams to energy with the Atwater factors
//! (protein 4, carbohydrate 4, fat 9 kcal per gram).

use serde::{Deserialize, Serialize};

use super::statistical_analysis::StatisticalAnalyzer;
use crate::constants::energy::{CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use crate::models::{DailyEntry, Nutrient};

/// Calorie deficit for one entry; positive when more was burned than consumed
#[must_use]
pub fn compute_daily_deficit(entry: &DailyEntry, default_calories: f64) -> f64 {
    let logged_burn = entry.value(Nutrient::CaloriesBurned);
    let burned = if logged_burn == 0.0 {
        default_calories
    } else {
        logged_burn
    };
    burned - entry.value(Nutrient::Calories)
}

/// Share of macronutrient energy per macro, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroPercentages {
    /// Protein share of macro energy
    pub protein_percent: f64,
    /// Carbohydrate share of macro energy
    pub carbs_percent: f64,
    /// Fat share of macro energy
    pub fat_percent: f64,
}

impl MacroPercentages {
    fn from_grams(protein: f64, carbs: f64, fat: f64) -> Option<Self> {
        let protein_kcal = protein * PROTEIN_KCAL_PER_GRAM;
        let carbs_kcal = carbs * CARBS_KCAL_PER_GRAM;
        let fat_kcal = fat * FAT_KCAL_PER_GRAM;
        let total = protein_kcal + carbs_kcal + fat_kcal;

        if !total.is_finite() || total <= 0.0 {
            return None;
        }

        Some(Self {
            protein_percent: protein_kcal / total * 100.0,
            carbs_percent: carbs_kcal / total * 100.0,
            fat_percent: fat_kcal / total * 100.0,
        })
    }
}

/// Energy split of the average protein, carbs, and fat across the entries
///
/// `None` for empty input or when no macro energy was logged.
#[must_use]
pub fn macro_split(entries: &[DailyEntry]) -> Option<MacroPercentages> {
    if entries.is_empty() {
        return None;
    }
    MacroPercentages::from_grams(
        StatisticalAnalyzer::average_by(entries, |e| e.value(Nutrient::Protein)),
        StatisticalAnalyzer::average_by(entries, |e| e.value(Nutrient::Carbs)),
        StatisticalAnalyzer::average_by(entries, |e| e.value(Nutrient::Fat)),
    )
}

/// Energy split of a single day
#[must_use]
pub fn entry_macro_split(entry: &DailyEntry) -> Option<MacroPercentages> {
    MacroPercentages::from_grams(
        entry.value(Nutrient::Protein),
        entry.value(Nutrient::Carbs),
        entry.value(Nutrient::Fat),
    )
}
