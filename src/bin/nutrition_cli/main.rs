// ABOUTME: Nutrition CLI - command-line caller of the nutrition statistics engine
// ABOUTME: Loads entries and targets from JSON files and prints summaries, drink stats, tables, or CSV
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Trend cards for the last 7 days
//! nutrition-cli --entries entries.json summary
//!
//! # Everything except the latest day, as JSON
//! nutrition-cli --entries entries.json --range prev --format json summary
//!
//! # Drink statistics anchored at a given date
//! nutrition-cli --entries entries.json --range all drinks --reference 2025-11-20
//!
//! # History table sorted by protein, smallest first
//! nutrition-cli --entries entries.json entries --sort protein --direction asc
//!
//! # CSV export of the active cycle
//! nutrition-cli --entries entries.json --scope active --active-cycle c1 export --stdout
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nutrition_stats::config::StatsConfig;
use nutrition_stats::constants::service_names;
use nutrition_stats::formatters::OutputFormat;
use nutrition_stats::intelligence::{SortDirection, SortKey};
use nutrition_stats::logging::LoggingConfig;
use nutrition_stats::models::{CycleScope, Preferences, RangeFilter};
use tracing::debug;

use helpers::input::{load_cycles, load_entries, load_settings, load_targets, prepare_view};

#[derive(Parser)]
#[command(
    name = "nutrition-cli",
    about = "Nutrition statistics CLI",
    long_about = "Computes deficits, trends, drink statistics, and CSV exports from daily nutrition entries stored as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file holding an array of daily entries
    #[arg(long, global = true, default_value = "entries.json")]
    entries: PathBuf,

    /// JSON file holding nutrient targets (defaults apply when omitted)
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// JSON file holding user settings (theme, targets, active cycle)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// JSON file holding logging cycles, used for scope labels
    #[arg(long, global = true)]
    cycles: Option<PathBuf>,

    /// Range view: prev, all, 3, 7, or 30
    #[arg(long, global = true, default_value = "7")]
    range: RangeFilter,

    /// Cycle scope: all, active, legacy, or cycle:<id> (defaults to active when a cycle is active)
    #[arg(long, global = true)]
    scope: Option<CycleScope>,

    /// Active cycle id; overrides the one in the settings file
    #[arg(long, global = true)]
    active_cycle: Option<String>,

    /// Hide drink tracking in the output
    #[arg(long, global = true)]
    hide_drinks: bool,

    /// Output format: text or json
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Average, median, trend, and target per nutrient
    Summary,

    /// Drink statistics over rolling 7-day windows
    Drinks {
        /// Anchor date (YYYY-MM-DD); defaults to the prev-range anchor or today
        #[arg(long)]
        reference: Option<String>,
    },

    /// History table with deficits and drinks
    Entries {
        /// Column to sort by: date, deficit, drinks, or a nutrient name
        #[arg(long, default_value = "date")]
        sort: SortKey,

        /// Sort direction: asc or desc
        #[arg(long, default_value = "desc")]
        direction: SortDirection,
    },

    /// CSV export of the selected entries
    Export {
        /// Output file (defaults to nutrition-data-<today>.csv)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the CSV to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env()
        .with_level(log_level)
        .with_service_name(service_names::NUTRITION_CLI)
        .init()?;

    let config = StatsConfig::load()?;
    let settings = load_settings(cli.settings.as_deref())?;
    let preferences = Preferences {
        theme: settings.as_ref().map(|s| s.theme).unwrap_or_default(),
        show_drinks: !cli.hide_drinks,
    };

    let entries = load_entries(&cli.entries)?;
    let targets = match (&cli.targets, &settings) {
        (None, Some(settings)) => settings.targets.clone(),
        (path, _) => load_targets(path.as_deref(), config.default_calorie_baseline)?,
    };
    let cycles = load_cycles(cli.cycles.as_deref())?;
    let active_cycle = cli
        .active_cycle
        .or_else(|| settings.and_then(|s| s.active_cycle_id));
    let scope = cli
        .scope
        .unwrap_or_else(|| CycleScope::initial(active_cycle.as_deref()));
    debug!(
        entries = entries.len(),
        cycles = cycles.len(),
        range = %cli.range,
        scope = %scope,
        theme = %preferences.theme,
        "Loaded input files"
    );

    let view = prepare_view(
        &entries,
        &cycles,
        &scope,
        active_cycle.as_deref(),
        cli.range,
    );

    match cli.command {
        Command::Summary => {
            commands::summary::run(&view, &targets, &config, preferences, cli.format)?;
        }
        Command::Drinks { reference } => {
            commands::drinks::run(
                &view,
                reference.as_deref(),
                &config,
                preferences,
                cli.format,
            )?;
        }
        Command::Entries { sort, direction } => {
            commands::entries::run(&view, &targets, sort, direction, &config, preferences)?;
        }
        Command::Export { output, stdout } => {
            commands::export::run(&view, &targets, output, stdout)?;
        }
    }

    Ok(())
}
