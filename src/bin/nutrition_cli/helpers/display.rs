// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutrition-cli
// ABOUTME: Provides consistent text rendering for scope headers, trend cards, drink stats, and tables

use nutrition_stats::config::DrinkTargetConfig;
use nutrition_stats::formatters::{
    drink_summary_lines, format_display_date, format_plain_number, format_signed_deficit,
    format_with_unit, to_fixed,
};
use nutrition_stats::intelligence::{
    compute_daily_deficit, DrinkStats, NutrientSummary, TrendDirection,
};
use nutrition_stats::models::{DailyEntry, Nutrient};

use super::input::View;

const fn trend_marker(trend: TrendDirection) -> &'static str {
    match trend {
        TrendDirection::Up => "up",
        TrendDirection::Down => "down",
        TrendDirection::Stable => "-",
    }
}

/// Display which entries the output covers
pub fn display_view_header(view: &View) {
    println!("{}", view.scope_label);
    println!(
        "Range: {} ({} entries)",
        view.range.caption(),
        view.entries.len()
    );
    println!("{}", "=".repeat(60));
}

/// Display one block per trend card
pub fn display_summaries(summaries: &[NutrientSummary]) {
    if summaries.is_empty() {
        println!("No data available");
        return;
    }

    for summary in summaries {
        println!("{}", summary.label);
        println!(
            "   Avg:    {:>12}  {}",
            format_with_unit(summary.average, &summary.unit),
            trend_marker(summary.trend.avg_trend)
        );
        println!(
            "   Median: {:>12}  {}",
            format_with_unit(summary.median, &summary.unit),
            trend_marker(summary.trend.med_trend)
        );
        if let Some(target) = summary.target {
            println!(
                "   Target: {:>12}",
                format!("{}{}", format_plain_number(target), summary.unit)
            );
        }
    }
}

/// Display the drink statistics block
pub fn display_drink_stats(stats: &DrinkStats, targets: &DrinkTargetConfig) {
    println!("Drinks");
    println!(
        "   Drinking days:        {} ({} in the last 7 days)",
        stats.days_with_drinks, stats.days_with_drinks_last7
    );
    for line in drink_summary_lines(stats) {
        println!("   {line}");
    }
    println!(
        "   Daily target ({}):     {}",
        format_plain_number(targets.daily_target),
        if stats.daily_exceeds_target {
            "exceeded"
        } else {
            "within"
        }
    );
    println!(
        "   Weekly target ({}):   {}",
        format_plain_number(targets.weekly_target),
        if stats.weekly_exceeds_target {
            "exceeded"
        } else {
            "within"
        }
    );
}

const TABLE_NUTRIENTS: [Nutrient; 7] = [
    Nutrient::Calories,
    Nutrient::Carbs,
    Nutrient::Sugar,
    Nutrient::Protein,
    Nutrient::Fiber,
    Nutrient::Fat,
    Nutrient::Sodium,
];

/// Display the history table, one row per entry
pub fn display_entries_table(
    entries: &[DailyEntry],
    default_calories: f64,
    show_drinks: bool,
    drink_stats: Option<&DrinkStats>,
) {
    let mut header = format!("{:<24}{:>10}{:>9}", "Date", "Calories", "Deficit");
    for nutrient in TABLE_NUTRIENTS.iter().skip(1) {
        header.push_str(&format!("{:>9}", nutrient.label()));
    }
    if show_drinks {
        header.push_str(&format!("{:>8}", "Drinks"));
    }
    println!("{header}");
    println!("{}", "-".repeat(header.len()));

    for entry in entries {
        let mut row = format!(
            "{:<24}{:>10}{:>9}",
            format_display_date(&entry.date.to_string()),
            to_fixed(entry.value(Nutrient::Calories), 0),
            format_signed_deficit(compute_daily_deficit(entry, default_calories), 0)
        );
        for nutrient in TABLE_NUTRIENTS.iter().skip(1) {
            row.push_str(&format!("{:>9}", format_plain_number(entry.value(*nutrient))));
        }
        if show_drinks {
            let drinks = entry
                .drinks
                .tracked_value()
                .map_or_else(|| "-".to_owned(), format_plain_number);
            row.push_str(&format!("{drinks:>8}"));
        }
        println!("{row}");
    }

    if let (true, Some(stats)) = (show_drinks, drink_stats) {
        println!();
        println!("Drinks Summary:");
        for line in drink_summary_lines(stats) {
            println!("   {line}");
        }
    }
}
