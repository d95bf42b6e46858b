// ABOUTME: Summary command for nutrition-cli
// ABOUTME: Prints average, median, trend, and target for each trend card
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_stats::config::StatsConfig;
use nutrition_stats::errors::AppResult;
use nutrition_stats::formatters::{format_output, macro_split_line, OutputFormat};
use nutrition_stats::intelligence::{macro_split, summarize_nutrients};
use nutrition_stats::models::{NutrientTargets, Preferences};
use serde_json::json;
use tracing::info;

use crate::helpers::display::{display_summaries, display_view_header};
use crate::helpers::input::View;

/// Print the trend cards for the selected entries
pub fn run(
    view: &View,
    targets: &NutrientTargets,
    config: &StatsConfig,
    preferences: Preferences,
    format: OutputFormat,
) -> AppResult<()> {
    info!("Summarizing {} entries", view.entries.len());
    let summaries = summarize_nutrients(&view.entries, targets, &config.trend);
    let macros = macro_split(&view.entries);

    match format {
        OutputFormat::Json => {
            let payload = json!({
                "scope": view.scope_label,
                "range": view.range,
                "summaries": summaries,
                "macroSplit": macros,
                "showDrinks": preferences.show_drinks,
            });
            println!("{}", format_output(&payload)?);
        }
        OutputFormat::Text => {
            display_view_header(view);
            display_summaries(&summaries);
            if let Some(split) = macros {
                println!();
                println!("{}", macro_split_line(&split));
            }
        }
    }
    Ok(())
}
