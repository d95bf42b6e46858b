// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutrition-cli
// ABOUTME: Provides access to summary, drinks, entries, and export commands

pub mod drinks;
pub mod entries;
pub mod export;
pub mod summary;
