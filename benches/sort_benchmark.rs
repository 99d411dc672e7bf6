// SPDX-License-Identifier: MIT OR Apache-2.0
// Benchmarks: missing_docs - criterion_group! macro generates undocumentable code
#![allow(missing_docs)]
// Benchmarks: clippy lints relaxed for benchmark code (not production)
#![allow(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Benchmarks for sorting and duplicate detection
//!
//! Compares:
//! - Raw value sort vs keyed and nested-keyed sorts
//! - Ascending vs descending
//! - Quadratic duplicate detection as input grows
//!
//! Run with: cargo bench --bench sort_benchmark

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

use valkit::array::{
    SortKey, SortOrder, has_duplicate_json_values, has_duplicate_values, sort_values,
};

fn rows(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let score = (i * 7919) % 1000;
            json!({"id": i, "score": score, "stats": {"score": score}})
        })
        .collect()
}

// =============================================================================
// Sorting
// =============================================================================

fn bench_sort_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort/values");

    let keys = [
        ("raw", SortKey::none()),
        ("field", SortKey::field("score")),
        ("nested", SortKey::field("stats").nested("score")),
    ];

    for count in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        let input = rows(*count);

        for (name, key) in &keys {
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let id = format!("{name}/{order:?}");
                group.bench_with_input(BenchmarkId::new(id, count), &input, |b, input| {
                    b.iter(|| {
                        let mut values = input.clone();
                        sort_values(&mut values, key, order);
                        black_box(values);
                    });
                });
            }
        }
    }
    drop(group);
}

// =============================================================================
// Duplicates
// =============================================================================

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicates");

    for count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*count as u64));

        let ints: Vec<u64> = (0..*count as u64).collect();
        group.bench_with_input(BenchmarkId::new("u64", count), &ints, |b, ints| {
            b.iter(|| black_box(has_duplicate_values(black_box(ints))));
        });

        let values: Vec<Value> = ints.iter().map(|&i| json!(i)).collect();
        group.bench_with_input(BenchmarkId::new("json", count), &values, |b, values| {
            b.iter(|| black_box(has_duplicate_json_values(black_box(values))));
        });
    }
    drop(group);
}

criterion_group!(benches, bench_sort_values, bench_duplicates);
criterion_main!(benches);
