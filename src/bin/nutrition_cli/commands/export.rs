// ABOUTME: Export command for nutrition-cli
// ABOUTME: Writes the CSV export to a file or stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::PathBuf;

use nutrition_stats::errors::AppResult;
use nutrition_stats::formatters::{export_file_name, export_to_csv};
use nutrition_stats::intelligence::local_today;
use nutrition_stats::models::NutrientTargets;
use tracing::info;

use crate::helpers::input::View;

/// Export the selected entries, newest first
pub fn run(
    view: &View,
    targets: &NutrientTargets,
    output: Option<PathBuf>,
    to_stdout: bool,
) -> AppResult<()> {
    let csv = export_to_csv(&view.entries, targets)?;

    if to_stdout {
        print!("{csv}");
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(local_today())));
    fs::write(&path, csv)?;
    info!("Exported {} entries to {}", view.entries.len(), path.display());
    println!("Exported {} entries to {}", view.entries.len(), path.display());
    Ok(())
}
