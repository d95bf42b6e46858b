// ABOUTME: Re-exports the data models from the nutrition-core crate
// ABOUTME: Daily entries, drink counts, targets, cycles, range tags, and settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrition_core::models::*;
