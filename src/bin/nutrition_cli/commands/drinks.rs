// ABOUTME: Drinks command for nutrition-cli
// ABOUTME: Prints rolling-window drink statistics for the selected entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_stats::config::StatsConfig;
use nutrition_stats::errors::AppResult;
use nutrition_stats::formatters::{format_output, OutputFormat};
use nutrition_stats::intelligence::{compute_drink_stats, parse_entry_date};
use nutrition_stats::models::Preferences;
use serde_json::json;
use tracing::info;

use crate::helpers::display::{display_drink_stats, display_view_header};
use crate::helpers::input::View;

/// Print drink statistics, anchored at `reference`, the prev-range anchor, or today
pub fn run(
    view: &View,
    reference: Option<&str>,
    config: &StatsConfig,
    preferences: Preferences,
    format: OutputFormat,
) -> AppResult<()> {
    if !preferences.show_drinks {
        info!("Drink tracking is hidden; skipping drink statistics");
        println!("Drink tracking is hidden");
        return Ok(());
    }

    let reference = match reference {
        Some(raw) => Some(parse_entry_date(raw)?),
        None => view.reference_date,
    };
    let stats = compute_drink_stats(&view.entries, reference, &config.drinks);

    match format {
        OutputFormat::Json => {
            let payload = json!({
                "scope": view.scope_label,
                "range": view.range,
                "referenceDate": reference,
                "stats": stats,
            });
            println!("{}", format_output(&payload)?);
        }
        OutputFormat::Text => {
            display_view_header(view);
            display_drink_stats(&stats, &config.drinks);
        }
    }
    Ok(())
}
