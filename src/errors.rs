// ABOUTME: Re-exports the unified error types from the nutrition-core crate
// ABOUTME: Keeps `crate::errors` paths stable for engine modules and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrition_core::errors::*;
