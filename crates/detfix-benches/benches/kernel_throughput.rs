// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Transcendental kernel throughput.
//!
//! Each function runs over the same fixed batch so per-element cost is
//! comparable across functions. Domain-restricted functions get inputs from
//! their domain; results are folded into an accumulator to keep the work
//! observable.
use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use detfix::math::{math128, math64};
use detfix::{FixedError, Scalar128};
use detfix_benches::InputStream;

const BATCH: usize = 256;

type Checked = fn(Scalar128) -> Result<Scalar128, FixedError>;
type Total = fn(Scalar128) -> Scalar128;

fn positive(batch: &[Scalar128]) -> Vec<Scalar128> {
    batch
        .iter()
        .map(|x| math128::abs(*x) + Scalar128::EPSILON)
        .collect()
}

fn bench_math128(c: &mut Criterion) {
    let mut group = c.benchmark_group("math128");
    group
        .throughput(Throughput::Elements(BATCH as u64))
        .measurement_time(Duration::from_secs(3));

    let mut inputs = InputStream::new(0xC0FF_EE00);
    let wide = inputs.batch128(BATCH, 1000);
    let pos = positive(&wide);
    let unit = inputs.batch128(BATCH, 1);
    let exps = inputs.batch128(BATCH, 40);

    let total: [(&str, Total, &[Scalar128]); 6] = [
        ("sin", math128::sin, &wide),
        ("cos", math128::cos, &wide),
        ("tan", math128::tan, &unit),
        ("atan", math128::atan, &wide),
        ("exp2", math128::exp2, &exps),
        ("exp", math128::exp, &exps),
    ];
    for (name, f, xs) in total {
        group.bench_function(BenchmarkId::new(name, BATCH), |b| {
            b.iter(|| xs.iter().fold(Scalar128::ZERO, |acc, x| acc + f(black_box(*x))));
        });
    }

    let checked: [(&str, Checked, &[Scalar128]); 7] = [
        ("sqrt", math128::sqrt, &pos),
        ("rsqrt", math128::rsqrt, &pos),
        ("rcp", math128::rcp, &pos),
        ("log2", math128::log2, &pos),
        ("ln", math128::ln, &pos),
        ("asin", math128::asin, &unit),
        ("acos", math128::acos, &unit),
    ];
    for (name, f, xs) in checked {
        group.bench_function(BenchmarkId::new(name, BATCH), |b| {
            b.iter(|| {
                xs.iter().fold(Scalar128::ZERO, |acc, x| {
                    acc + f(black_box(*x)).unwrap_or_default()
                })
            });
        });
    }

    group.bench_function(BenchmarkId::new("atan2", BATCH), |b| {
        b.iter(|| {
            wide.iter()
                .zip(&unit)
                .fold(Scalar128::ZERO, |acc, (y, x)| acc + math128::atan2(black_box(*y), black_box(*x)))
        });
    });
    group.bench_function(BenchmarkId::new("pow", BATCH), |b| {
        b.iter(|| {
            pos.iter().zip(&unit).fold(Scalar128::ZERO, |acc, (x, e)| {
                acc + math128::pow(black_box(*x), black_box(*e)).unwrap_or_default()
            })
        });
    });
    group.finish();
}

fn bench_math64_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("math64");
    group.throughput(Throughput::Elements(BATCH as u64));

    let mut inputs = InputStream::new(0xC0FF_EE64);
    let wide = inputs.batch64(BATCH, 1000);
    let pos: Vec<_> = wide.iter().map(|x| math64::abs(*x)).collect();

    group.bench_function(BenchmarkId::new("sin", BATCH), |b| {
        b.iter(|| wide.iter().fold(detfix::Scalar64::ZERO, |acc, x| acc + math64::sin(black_box(*x))));
    });
    group.bench_function(BenchmarkId::new("sqrt", BATCH), |b| {
        b.iter(|| {
            pos.iter().fold(detfix::Scalar64::ZERO, |acc, x| {
                acc + math64::sqrt(black_box(*x)).unwrap_or_default()
            })
        });
    });
    group.finish();
}

criterion_group!(benches, bench_math128, bench_math64_facade);
criterion_main!(benches);
