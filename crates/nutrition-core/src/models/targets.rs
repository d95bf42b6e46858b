// ABOUTME: Per-user nutrient goal values used for deficit baselines and target comparisons
// ABOUTME: NutrientTargets definition with the defaults applied to new accounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::entry::Nutrient;
use crate::constants::default_targets;

/// Per-user goal values for each nutrient
///
/// `calories` doubles as the default burn baseline for entries that carry no
/// calories-burned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutrientTargets {
    /// Daily calorie intake target
    pub calories: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Sugar (g)
    pub sugar: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Fat (g)
    pub fat: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Target daily calorie deficit
    pub deficit: f64,
    /// Max daily drinks
    pub drinks: f64,
}

impl Default for NutrientTargets {
    fn default() -> Self {
        Self {
            calories: default_targets::CALORIES,
            carbs: default_targets::CARBS,
            sugar: default_targets::SUGAR,
            protein: default_targets::PROTEIN,
            fiber: default_targets::FIBER,
            fat: default_targets::FAT,
            sodium: default_targets::SODIUM,
            deficit: default_targets::DEFICIT,
            drinks: default_targets::DRINKS,
        }
    }
}

impl NutrientTargets {
    /// Target for a raw nutrient; calories burned has no goal of its own
    #[must_use]
    pub const fn for_nutrient(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => Some(self.calories),
            Nutrient::CaloriesBurned => None,
            Nutrient::Carbs => Some(self.carbs),
            Nutrient::Sugar => Some(self.sugar),
            Nutrient::Protein => Some(self.protein),
            Nutrient::Fiber => Some(self.fiber),
            Nutrient::Fat => Some(self.fat),
            Nutrient::Sodium => Some(self.sodium),
        }
    }
}
