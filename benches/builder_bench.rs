// ABOUTME: Criterion benchmarks for parameter accumulation and finalization
// ABOUTME: Measures append, transformed append and finalize cost for various entry counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for the parameter/type accumulator.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::cast_possible_wrap,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dbparams::transforms::{null_to_empty, to_text};
use dbparams::{ParameterManifest, ParameterTypeArrayBuilder, SqlType};

const ENTRY_COUNTS: [usize; 3] = [8, 64, 512];

fn filled_builder(count: usize) -> ParameterTypeArrayBuilder {
    let mut builder = ParameterTypeArrayBuilder::new();
    for i in 0..count {
        builder.append(i as i64, SqlType::BIGINT);
    }
    builder
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for count in ENTRY_COUNTS {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("plain", count), &count, |b, &count| {
            b.iter(|| {
                let mut builder = ParameterTypeArrayBuilder::new();
                for i in 0..count {
                    builder.append(black_box(i as i64), SqlType::BIGINT);
                }
                builder
            });
        });
        group.bench_with_input(
            BenchmarkId::new("transformed", count),
            &count,
            |b, &count| {
                b.iter(|| {
                    let mut builder = ParameterTypeArrayBuilder::new();
                    for i in 0..count {
                        if i % 2 == 0 {
                            builder.append_with(black_box(i), SqlType::VARCHAR, to_text);
                        } else {
                            builder.append_with(None::<&str>, SqlType::VARCHAR, null_to_empty);
                        }
                    }
                    builder
                });
            },
        );
    }

    group.finish();
}

fn bench_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("finalize");

    for count in ENTRY_COUNTS {
        let builder = filled_builder(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &builder, |b, builder| {
            b.iter(|| black_box(builder).finalize());
        });
    }

    group.finish();
}

fn bench_manifest_build(c: &mut Criterion) {
    let entries: Vec<String> = (0..64)
        .map(|i| format!(r#"{{ "value": "{i}", "type": "BIGINT", "transform": "parse_integer" }}"#))
        .collect();
    let manifest = ParameterManifest::from_json_str(&format!("[{}]", entries.join(","))).unwrap();

    c.bench_function("manifest_build_64", |b| {
        b.iter(|| black_box(&manifest).build().unwrap());
    });
}

criterion_group!(benches, bench_append, bench_finalize, bench_manifest_build);
criterion_main!(benches);
