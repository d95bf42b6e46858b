// ABOUTME: Explicit user settings and device preferences passed to callers of the engine
// ABOUTME: Theme, UserSettings, and Preferences definitions with their defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::targets::NutrientTargets;
use crate::errors::AppError;

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(AppError::invalid_format(format!(
                "theme '{other}' must be light or dark"
            ))),
        }
    }
}

/// Settings stored per user by the settings collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Color theme
    pub theme: Theme,
    /// Nutrient goals
    pub targets: NutrientTargets,
    /// Cycle new entries are assigned to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_cycle_id: Option<String>,
}

/// Device-local display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Color theme
    pub theme: Theme,
    /// Whether drink tracking is shown (privacy toggle)
    pub show_drinks: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            show_drinks: true,
        }
    }
}
