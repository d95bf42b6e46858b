// ABOUTME: Core types and constants for the nutrition statistics engine
// ABOUTME: Foundation crate with error handling, domain constants, and entry models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! statistics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Domain constants (drink targets, trend thresholds, default targets)
//! - **models**: Daily entries, targets, logging cycles, range filters, and user settings

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`DailyEntry`, `NutrientTargets`, `RangeFilter`, etc.)
pub mod models;
