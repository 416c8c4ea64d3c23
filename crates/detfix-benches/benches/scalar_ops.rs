// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Scalar arithmetic throughput: split-word multiply and long division.
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use detfix::{Scalar128, Scalar64};
use detfix_benches::InputStream;

const BATCH: usize = 1024;

fn bench_scalar64(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar64");
    let mut inputs = InputStream::new(0x5EED);
    let lhs = inputs.batch64(BATCH, 1000);
    let rhs: Vec<Scalar64> = inputs
        .batch64(BATCH, 1000)
        .into_iter()
        .map(|x| if x == Scalar64::ZERO { Scalar64::ONE } else { x })
        .collect();
    group.throughput(Throughput::Elements(BATCH as u64));

    group.bench_function(BenchmarkId::new("mul", BATCH), |b| {
        b.iter(|| {
            lhs.iter()
                .zip(&rhs)
                .fold(Scalar64::ZERO, |acc, (x, y)| acc + black_box(*x) * black_box(*y))
        });
    });
    group.bench_function(BenchmarkId::new("div", BATCH), |b| {
        b.iter(|| {
            lhs.iter()
                .zip(&rhs)
                .fold(Scalar64::ZERO, |acc, (x, y)| acc + black_box(*x) / black_box(*y))
        });
    });
    group.finish();
}

fn bench_scalar128(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar128");
    let mut inputs = InputStream::new(0x5EED_0128);
    let lhs = inputs.batch128(BATCH, 1_000_000);
    let rhs: Vec<Scalar128> = inputs
        .batch128(BATCH, 1_000_000)
        .into_iter()
        .map(|x| if x == Scalar128::ZERO { Scalar128::ONE } else { x })
        .collect();
    group.throughput(Throughput::Elements(BATCH as u64));

    group.bench_function(BenchmarkId::new("mul", BATCH), |b| {
        b.iter(|| {
            lhs.iter()
                .zip(&rhs)
                .fold(Scalar128::ZERO, |acc, (x, y)| acc + black_box(*x) * black_box(*y))
        });
    });
    group.bench_function(BenchmarkId::new("div", BATCH), |b| {
        b.iter(|| {
            lhs.iter()
                .zip(&rhs)
                .fold(Scalar128::ZERO, |acc, (x, y)| acc + black_box(*x) / black_box(*y))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_scalar64, bench_scalar128);
criterion_main!(benches);
