// ABOUTME: Integration tests for the CSV export
// ABOUTME: Checks the summary block, data rows that re-parse to the raw values, and the surplus sign convention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::entry;
use csv::ReaderBuilder;
use nutrition_stats::formatters::{column_statistics, export_to_csv, ExportColumn};
use nutrition_stats::models::{DailyEntry, NutrientTargets};

const HEADER_COLUMNS: &str =
    "calories,caloriesBurned,carbs,sugar,protein,fiber,fat,sodium,deficit,drinks";

fn sample_entries() -> Vec<DailyEntry> {
    vec![
        entry("2025-11-20")
            .calories(2150.0)
            .calories_burned(2000.0)
            .drinks(2.0)
            .build(),
        entry("2025-11-19").calories(1800.0).drinks(0.0).build(),
        entry("2025-11-18")
            .calories(1900.5)
            .calories_burned(2400.0)
            .build(),
    ]
}

#[test]
fn test_export_layout() {
    common::init_test_logging();
    let output = export_to_csv(&sample_entries(), &NutrientTargets::default()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], format!("Statistic,{HEADER_COLUMNS}"));
    assert!(lines[1].starts_with("Averages,"));
    assert!(lines[2].starts_with("Medians,"));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], format!("Date,{HEADER_COLUMNS}"));
    assert!(output.ends_with('\n'));
}

#[test]
fn test_data_rows_keep_raw_values_and_sign_surpluses() {
    let output = export_to_csv(&sample_entries(), &NutrientTargets::default()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[5], "2025-11-20,2150,2000,0,0,0,0,0,0,+150.0,2");
    assert_eq!(lines[6], "2025-11-19,1800,0,0,0,0,0,0,0,200.0,0");
    assert_eq!(lines[7], "2025-11-18,1900.5,2400,0,0,0,0,0,0,499.5,");
}

#[test]
fn test_summary_rows_round_to_one_decimal() {
    let output = export_to_csv(&sample_entries(), &NutrientTargets::default()).unwrap();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(output.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

    let averages = &records[1];
    assert_eq!(&averages[0], "Averages");
    assert_eq!(&averages[1], "1950.2");
    assert_eq!(&averages[2], "1466.7");
    assert_eq!(&averages[3], "0.0");
    assert_eq!(&averages[9], "183.2");
    // drinks cover tracked days, the logged zero included
    assert_eq!(&averages[10], "1.0");

    let medians = &records[2];
    assert_eq!(&medians[1], "1900.5");
    assert_eq!(&medians[9], "200.0");
    assert_eq!(&medians[10], "1.0");
}

#[test]
fn test_export_of_no_entries_has_zero_statistics() {
    let output = export_to_csv(&[], &NutrientTargets::default()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "Averages,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0");
    assert_eq!(lines[4], format!("Date,{HEADER_COLUMNS}"));
}

#[test]
fn test_deficit_uses_calorie_target_as_baseline() {
    let targets = NutrientTargets {
        calories: 2500.0,
        ..NutrientTargets::default()
    };
    let stats = column_statistics(&sample_entries()[1..2], &targets);
    let deficit = stats
        .iter()
        .find(|stat| stat.column == ExportColumn::Deficit)
        .unwrap();
    assert!((deficit.average - 700.0).abs() < 1e-9);
}

#[test]
fn test_column_headers_match_wire_names() {
    let headers: Vec<&str> = ExportColumn::ALL.iter().map(|c| c.header()).collect();
    assert_eq!(headers.join(","), HEADER_COLUMNS);
}

#[test]
fn test_data_rows_reparse_to_exact_entry_values() {
    let entries = vec![
        entry("2025-11-20")
            .calories(0.1 + 0.2)
            .calories_burned(2234.75)
            .carbs(12.345)
            .sugar(1e-7)
            .protein(400.0 / 3.0)
            .fiber(29.9)
            .fat(1e21)
            .sodium(2300.0)
            .drinks(2.5)
            .build(),
        entry("2025-11-19")
            .calories(1850.25)
            .sodium(0.000_123)
            .build(),
    ];
    let output = export_to_csv(&entries, &NutrientTargets::default()).unwrap();
    let (_, data_block) = output.split_once("\n\n").unwrap();

    let mut reader = ReaderBuilder::new().from_reader(data_block.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), entries.len());

    for (record, entry) in records.iter().zip(&entries) {
        assert_eq!(&record[0], entry.date.format("%Y-%m-%d").to_string());
        for (index, column) in ExportColumn::ALL.iter().enumerate() {
            let cell = &record[index + 1];
            match *column {
                ExportColumn::Nutrient(nutrient) => {
                    let parsed: f64 = cell.parse().unwrap();
                    assert_eq!(
                        parsed.to_bits(),
                        entry.value(nutrient).to_bits(),
                        "{} cell '{cell}' does not round-trip",
                        column.header()
                    );
                }
                ExportColumn::Drinks => match entry.drinks.tracked_value() {
                    Some(count) => {
                        let parsed: f64 = cell.parse().unwrap();
                        assert_eq!(parsed.to_bits(), count.to_bits());
                    }
                    None => assert_eq!(cell, ""),
                },
                ExportColumn::Deficit => {}
            }
        }
    }
}
