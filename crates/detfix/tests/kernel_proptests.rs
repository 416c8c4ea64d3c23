// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use detfix::math::{math128, math64};
use detfix::{Scalar128, Scalar64};

// Seeds are pinned so failures reproduce across machines and CI. Override
// locally with PROPTEST_SEED or edit the bytes below.
fn pinned_runner(seed: u8, cases: u32) -> TestRunner {
    let mut seed_bytes = [0_u8; 32];
    seed_bytes[0] = seed;
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &seed_bytes);
    TestRunner::new_with_rng(
        PropConfig {
            cases,
            ..PropConfig::default()
        },
        rng,
    )
}

/// Exact quotient `n / d` rounded half away from zero.
fn rounded_quotient(n: i128, d: i128) -> i128 {
    let q = (2 * n.abs() + d.abs()) / (2 * d.abs());
    if (n < 0) == (d < 0) {
        q
    } else {
        -q
    }
}

#[test]
fn scalar64_division_is_round_to_nearest_then_saturates() {
    let mut runner = pinned_runner(0x42, 2048);
    let divisor = any::<i64>().prop_filter("non-zero", |d| *d != 0);
    runner
        .run(&(any::<i64>(), divisor), |(a, b)| {
            let got = (Scalar64::from_raw(a) / Scalar64::from_raw(b)).raw();
            let want = rounded_quotient(i128::from(a) << 32, i128::from(b))
                .clamp(i128::from(i64::MIN), i128::from(i64::MAX));
            prop_assert_eq!(i128::from(got), want);
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn scalar128_division_is_round_to_nearest() {
    let mut runner = pinned_runner(0x43, 2048);
    let bound = 1_i128 << 60;
    let divisor = (-bound..bound).prop_filter("non-zero", |d| *d != 0);
    runner
        .run(&(-bound..bound, divisor), |(a, b)| {
            let got = (Scalar128::from_raw(a) / Scalar128::from_raw(b)).raw();
            prop_assert_eq!(got, rounded_quotient(a << 64, b));
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn atan2_matches_double_reference_for_random_pairs() {
    let mut runner = pinned_runner(0x44, 1000);
    let coord = -50.0_f64..50.0;
    runner
        .run(&(coord.clone(), coord), |(y, x)| {
            let (y128, x128) = (Scalar128::from_f64(y), Scalar128::from_f64(x));
            let want = libm::atan2(y128.to_f64(), x128.to_f64());
            let got = math128::atan2(y128, x128).to_f64();
            prop_assert!((got - want).abs() < 1e-12, "atan2({y}, {x}) = {got}, want {want}");

            let (y64, x64) = (Scalar64::from_f64(y), Scalar64::from_f64(x));
            let want = libm::atan2(y64.to_f64(), x64.to_f64());
            let got = math64::atan2(y64, x64).to_f64();
            prop_assert!((got - want).abs() < 1e-8, "atan2({y}, {x}) = {got}, want {want}");
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn sine_and_cosine_track_libm_and_stay_on_the_unit_circle() {
    let mut runner = pinned_runner(0x45, 1000);
    runner
        .run(&(-100.0_f64..100.0), |angle| {
            let x = Scalar128::from_f64(angle);
            let (s, c) = math128::sin_cos(x);
            let reference = x.to_f64();
            prop_assert!((s.to_f64() - libm::sin(reference)).abs() < 1e-12);
            prop_assert!((c.to_f64() - libm::cos(reference)).abs() < 1e-12);
            let norm = s * s + c * c;
            prop_assert!((norm - Scalar128::ONE).raw().abs() < 1 << 20);
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn roots_logs_and_exponentials_track_libm() {
    let mut runner = pinned_runner(0x46, 1000);
    runner
        .run(&(0.001_f64..1.0e6), |v| {
            let x = Scalar128::from_f64(v);
            let r = x.to_f64();
            let rel = |got: Scalar128, want: f64| (got.to_f64() - want).abs() / want.abs().max(1.0);

            let root = math128::sqrt(x).unwrap_or_default();
            prop_assert!(rel(root, libm::sqrt(r)) < 1e-14);
            let inv_root = math128::rsqrt(x).unwrap_or_default();
            prop_assert!(rel(inv_root, 1.0 / libm::sqrt(r)) < 1e-14);
            let inv = math128::rcp(x).unwrap_or_default();
            prop_assert!(rel(inv, 1.0 / r) < 1e-14);
            let lg = math128::log2(x).unwrap_or_default();
            prop_assert!(rel(lg, libm::log2(r)) < 1e-14);
            let e = math128::exp2(math128::log2(x).unwrap_or_default() / Scalar128::from(2));
            prop_assert!(rel(e, libm::sqrt(r)) < 1e-12);
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn kernel_is_a_pure_function_of_input_bits() {
    let mut runner = pinned_runner(0x47, 256);
    runner
        .run(&any::<i128>(), |raw| {
            let x = Scalar128::from_raw(raw);
            prop_assert_eq!(math128::sin(x), math128::sin(Scalar128::from_raw(raw)));
            prop_assert_eq!(math128::atan2(x, Scalar128::ONE), math128::atan(x));
            prop_assert_eq!(math128::sqrt(x).is_err(), x.is_negative());
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}
