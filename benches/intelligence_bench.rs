// ABOUTME: Criterion benchmarks for the nutrition statistics engine
// ABOUTME: Measures trend summaries, drink windows, sorting, and CSV export over growing histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the statistics engine.
//!
//! Every scenario runs over one month, one year, and five years of entries.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{anchor_date, generate_history, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrition_stats::config::{DrinkTargetConfig, TrendConfig};
use nutrition_stats::formatters::export_to_csv;
use nutrition_stats::intelligence::{
    compute_drink_stats_at, filter_by_range_at, sort_entries, summarize_nutrients, SortDirection,
    SortKey, StatisticalAnalyzer,
};
use nutrition_stats::models::{Nutrient, NutrientTargets, RangeFilter};

const SIZES: [HistorySize; 3] = [HistorySize::Month, HistorySize::Year, HistorySize::MultiYear];

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("nutrient_summaries");
    let targets = NutrientTargets::default();
    let config = TrendConfig::default();

    for size in SIZES {
        let entries = generate_history(size);
        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("summarize", size.days()),
            &entries,
            |b, entries| {
                b.iter(|| summarize_nutrients(black_box(entries), &targets, &config));
            },
        );
    }

    group.finish();
}

fn bench_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression");
    let entries = generate_history(HistorySize::Year);

    group.bench_function("protein_slope_365_days", |b| {
        b.iter(|| {
            StatisticalAnalyzer::linear_regression_slope(black_box(&entries), |e| {
                e.value(Nutrient::Protein)
            })
        });
    });

    let values: Vec<f64> = entries.iter().map(|e| e.value(Nutrient::Sodium)).collect();
    group.bench_function("split_half_medians_365_days", |b| {
        b.iter(|| StatisticalAnalyzer::split_half_medians(black_box(&values)));
    });

    group.finish();
}

fn bench_drink_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("drink_stats");
    let targets = DrinkTargetConfig::default();

    for size in SIZES {
        let entries = generate_history(size);
        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("rolling_windows", size.days()),
            &entries,
            |b, entries| {
                b.iter(|| compute_drink_stats_at(black_box(entries), anchor_date(), &targets));
            },
        );
    }

    group.finish();
}

fn bench_table_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_pipeline");
    let entries = generate_history(HistorySize::MultiYear);

    group.bench_function("prev_range_then_sort_by_deficit", |b| {
        b.iter(|| {
            let visible = filter_by_range_at(black_box(&entries), RangeFilter::Previous, anchor_date());
            sort_entries(&visible, SortKey::Deficit, SortDirection::Desc, 2000.0)
        });
    });

    group.bench_function("sort_by_drinks", |b| {
        b.iter(|| sort_entries(black_box(&entries), SortKey::Drinks, SortDirection::Asc, 0.0));
    });

    group.finish();
}

fn bench_csv_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_export");
    group.sample_size(50);
    let targets = NutrientTargets::default();

    for size in SIZES {
        let entries = generate_history(size);
        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("export", size.days()),
            &entries,
            |b, entries| {
                b.iter(|| export_to_csv(black_box(entries), &targets));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_summaries,
    bench_regression,
    bench_drink_stats,
    bench_table_pipeline,
    bench_csv_export,
);
criterion_main!(benches);
