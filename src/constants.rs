// ABOUTME: Re-exports the domain constants from the nutrition-core crate
// ABOUTME: Drink targets, trend thresholds, energy densities, default targets, export labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrition_core::constants::*;
