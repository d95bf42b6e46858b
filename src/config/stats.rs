// ABOUTME: Statistics engine configuration with defaults, environment overrides, and validation
// ABOUTME: Trend classification thresholds, drink targets, and the default calorie-burn baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env::{self, VarError};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ConfigError;
use crate::constants::{default_targets, drinks, trends};

/// Minimum magnitudes for a statistic to count as a trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrendConfig {
    /// Threshold for gram/milligram/calorie nutrient quantities
    pub nutrient_threshold: f64,
    /// Threshold for daily deficits
    pub deficit_threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            nutrient_threshold: trends::NUTRIENT_TREND_THRESHOLD,
            deficit_threshold: trends::DEFICIT_TREND_THRESHOLD,
        }
    }
}

/// Drink limits and rolling window length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrinkTargetConfig {
    /// Daily average or median above this raises the daily flag
    pub daily_target: f64,
    /// Current window total above this raises the weekly flag
    pub weekly_target: f64,
    /// Days per rolling window
    pub window_days: i64,
}

impl Default for DrinkTargetConfig {
    fn default() -> Self {
        Self {
            daily_target: drinks::DAILY_DRINK_TARGET,
            weekly_target: drinks::WEEKLY_DRINK_TARGET,
            window_days: drinks::DRINK_WINDOW_DAYS,
        }
    }
}

/// Statistics engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsConfig {
    /// Trend classification thresholds
    pub trend: TrendConfig,
    /// Drink targets
    pub drinks: DrinkTargetConfig,
    /// Calories burned assumed for days without a logged burn, when no targets are at hand
    pub default_calorie_baseline: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            trend: TrendConfig::default(),
            drinks: DrinkTargetConfig::default(),
            default_calorie_baseline: default_targets::CALORIES,
        }
    }
}

impl StatsConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Statistics configuration loaded");
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(error @ VarError::NotUnicode(_)) => Err(error.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRITION_TREND_NUTRIENT_THRESHOLD",
            &mut self.trend.nutrient_threshold,
        )?;
        Self::apply_env_var(
            "NUTRITION_TREND_DEFICIT_THRESHOLD",
            &mut self.trend.deficit_threshold,
        )?;
        Self::apply_env_var("NUTRITION_DAILY_DRINK_TARGET", &mut self.drinks.daily_target)?;
        Self::apply_env_var(
            "NUTRITION_WEEKLY_DRINK_TARGET",
            &mut self.drinks.weekly_target,
        )?;
        Self::apply_env_var(
            "NUTRITION_DEFAULT_CALORIES",
            &mut self.default_calorie_baseline,
        )?;
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.trend.nutrient_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "trend.nutrient_threshold must be > 0",
            ));
        }
        if !is_positive(self.trend.deficit_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "trend.deficit_threshold must be > 0",
            ));
        }
        if !is_non_negative(self.drinks.daily_target) {
            return Err(ConfigError::ValueOutOfRange(
                "drinks.daily_target must be >= 0",
            ));
        }
        if !is_non_negative(self.drinks.weekly_target) {
            return Err(ConfigError::ValueOutOfRange(
                "drinks.weekly_target must be >= 0",
            ));
        }
        if self.drinks.weekly_target < self.drinks.daily_target {
            return Err(ConfigError::InvalidRange(
                "drinks.daily_target must be <= drinks.weekly_target",
            ));
        }
        if self.drinks.window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "drinks.window_days must be > 0",
            ));
        }
        if !is_positive(self.default_calorie_baseline) {
            return Err(ConfigError::ValueOutOfRange(
                "default_calorie_baseline must be > 0",
            ));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
