// ABOUTME: Criterion benchmarks for progression template generation
// ABOUTME: Measures per-model generation cost and the parallel all-model comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for progression template generation.
//!
//! Measures single-model generation across block lengths, the cost of deload
//! scheduling, and the parallel comparison of every model.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{deload_options, BlockLength};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mesoplan::{ProgressionModel, ProgressionOptions, TemplateGenerator};

fn bench_single_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for model in ProgressionModel::ALL {
        for length in BlockLength::ALL {
            let weeks = length.weeks();
            let generator = TemplateGenerator::new(weeks, 5.0, 6.0, ProgressionOptions::default());

            group.throughput(Throughput::Elements(u64::from(weeks)));
            group.bench_with_input(
                BenchmarkId::new(model.name(), length.label()),
                &generator,
                |b, generator| b.iter(|| generator.generate(black_box(model))),
            );
        }
    }

    group.finish();
}

fn bench_deload_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_with_deload");
    let weeks = BlockLength::Typical.weeks();

    for model in ProgressionModel::ALL {
        let generator = TemplateGenerator::new(weeks, 5.0, 6.0, deload_options(weeks));
        group.bench_function(model.name(), |b| {
            b.iter(|| generator.generate(black_box(model)));
        });
    }

    group.finish();
}

fn bench_compare_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_models");

    for length in BlockLength::ALL {
        let weeks = length.weeks();
        let generator = TemplateGenerator::new(weeks, 5.0, 6.0, deload_options(weeks));

        group.throughput(Throughput::Elements(u64::from(weeks) * 5));
        group.bench_with_input(
            BenchmarkId::from_parameter(length.label()),
            &generator,
            |b, generator| b.iter(|| black_box(generator).compare_models()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_model,
    bench_deload_schedule,
    bench_compare_models
);
criterion_main!(benches);
