// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use detfix::math::math128::{self, E, EPSILON, HALF_PI, PI, TAU};
use detfix::{FixedError, Scalar128};

fn q(v: f64) -> Scalar128 {
    Scalar128::from_f64(v)
}

fn i(v: i32) -> Scalar128 {
    Scalar128::from(v)
}

#[track_caller]
fn assert_close(got: Scalar128, want: f64, tol: f64) {
    let got = got.to_f64();
    assert!(
        (got - want).abs() <= tol * want.abs().max(1.0),
        "got {got}, want {want}"
    );
}

#[track_caller]
fn assert_domain(result: Result<Scalar128, FixedError>, op: &str) {
    match result {
        Err(FixedError::InvalidOperation { op: got }) => assert_eq!(got, op),
        other => panic!("expected {op} domain error, got {other:?}"),
    }
}

#[test]
fn constants_match_float_references() {
    assert_close(PI, core::f64::consts::PI, 1e-15);
    assert_close(HALF_PI, core::f64::consts::FRAC_PI_2, 1e-15);
    assert_close(TAU, core::f64::consts::TAU, 1e-15);
    assert_close(E, core::f64::consts::E, 1e-15);
    assert_eq!(EPSILON, Scalar128::from_words(0, 1 << 32));
    assert_eq!(TAU, PI + PI);
}

#[test]
fn rounding_utilities() {
    assert_eq!(math128::floor(q(-1.5)), i(-2));
    assert_eq!(math128::floor(q(2.75)), i(2));
    assert_eq!(math128::ceiling(q(-1.5)), i(-1));
    assert_eq!(math128::ceiling(q(1.25)), i(2));
    assert_eq!(math128::ceiling(i(4)), i(4));
    assert_eq!(math128::round(q(2.5)), i(3));
    assert_eq!(math128::round(q(-2.5)), i(-2));
    assert_eq!(math128::round(q(-2.75)), i(-3));
    assert_eq!(math128::abs(q(-3.5)), q(3.5));
    assert_eq!(math128::abs(Scalar128::MIN), Scalar128::MIN);
}

#[test]
fn selection_utilities() {
    assert_eq!(math128::sign(q(-0.1)), i(-1));
    assert_eq!(math128::sign(Scalar128::ZERO), Scalar128::ZERO);
    assert_eq!(math128::sign(Scalar128::EPSILON), i(1));
    assert_eq!(math128::min(i(3), i(-3)), i(-3));
    assert_eq!(math128::max(i(3), i(-3)), i(3));
    assert_eq!(math128::clamp(i(5), i(0), i(2)), i(2));
    assert_eq!(math128::clamp(i(-5), i(0), i(2)), i(0));
    assert_eq!(math128::clamp(i(1), i(0), i(2)), i(1));
    // Inverted bounds: the lower bound wins.
    assert_eq!(math128::clamp(i(1), i(3), i(2)), i(3));
    assert_eq!(math128::clamp01(q(1.5)), Scalar128::ONE);
    assert_eq!(math128::clamp01(q(-0.5)), Scalar128::ZERO);
    assert_eq!(math128::lerp(i(10), i(20), q(0.25)), q(12.5));
    assert_eq!(math128::lerp(i(10), i(20), q(1.5)), i(25));
}

#[test]
fn angle_unit_conversion() {
    assert_close(math128::rad_to_deg(PI), 180.0, 1e-15);
    assert_close(math128::deg_to_rad(i(180)), core::f64::consts::PI, 1e-15);
    assert_close(math128::deg_to_rad(i(-45)), -core::f64::consts::FRAC_PI_4, 1e-15);
}

#[test]
fn exact_results_at_powers_of_two() {
    assert_eq!(math128::sqrt(i(4)), Ok(i(2)));
    assert_eq!(math128::sqrt(i(9)), Ok(i(3)));
    assert_eq!(math128::sqrt(q(0.25)), Ok(q(0.5)));
    assert_eq!(math128::sqrt(Scalar128::ZERO), Ok(Scalar128::ZERO));
    assert_eq!(math128::rsqrt(i(4)), Ok(q(0.5)));
    assert_eq!(math128::rcp(i(2)), Ok(q(0.5)));
    assert_eq!(math128::rcp(i(-4)), Ok(q(-0.25)));
    assert_eq!(math128::log2(i(8)), Ok(i(3)));
    assert_eq!(math128::log2(i(1)), Ok(Scalar128::ZERO));
    assert_eq!(math128::log2(q(0.5)), Ok(i(-1)));
    assert_eq!(math128::exp2(i(10)), i(1024));
    assert_eq!(math128::exp2(i(-1)), q(0.5));
    assert_eq!(math128::pow(i(2), i(10)), Ok(i(1024)));
}

#[test]
fn pow_short_circuits() {
    assert_eq!(math128::pow(Scalar128::ONE, q(123.456)), Ok(Scalar128::ONE));
    assert_eq!(math128::pow(q(0.3), Scalar128::ZERO), Ok(Scalar128::ONE));
    assert_close(math128::pow(i(2), q(0.5)).unwrap_or_default(), core::f64::consts::SQRT_2, 1e-15);
    assert_close(math128::pow(q(0.5), i(-3)).unwrap_or_default(), 8.0, 1e-15);
}

#[test]
fn exponentials_and_logarithms() {
    assert_close(math128::exp(Scalar128::ONE), core::f64::consts::E, 1e-15);
    assert_close(math128::exp10(i(2)), 100.0, 1e-15);
    assert_close(math128::ln(E).unwrap_or_default(), 1.0, 1e-15);
    assert_close(math128::log10(i(1000)).unwrap_or_default(), 3.0, 1e-15);
    assert_close(math128::log(i(8), i(2)).unwrap_or_default(), 3.0, 1e-15);
    assert_close(math128::log(i(81), i(3)).unwrap_or_default(), 4.0, 1e-15);
}

#[test]
fn log2_is_continuous_across_the_near_one_interval() {
    for &x in &[0.998_f64, 0.999, 0.9995, 1.0001, 1.05, 1.0999, 1.1, 1.1001] {
        let got = math128::log2(q(x)).unwrap_or_default();
        assert_close(got, x.log2(), 1e-14);
    }
}

#[test]
fn exp2_saturates_outside_exponent_range() {
    assert_eq!(math128::exp2(i(63)), Scalar128::MAX);
    assert_eq!(math128::exp2(i(100)), Scalar128::MAX);
    assert_eq!(math128::exp2(i(-63)), Scalar128::ZERO);
    assert_close(math128::exp2(q(62.5)), 2f64.powf(62.5), 1e-15);
}

#[test]
fn trigonometry_matches_reference() {
    assert_eq!(math128::sin(Scalar128::ZERO), Scalar128::ZERO);
    assert!((math128::cos(Scalar128::ZERO) - Scalar128::ONE).raw().abs() <= 1);
    assert_close(math128::sin(math128::deg_to_rad(i(90))), 1.0, 1e-4);
    assert!((math128::sin(math128::deg_to_rad(i(90))) - Scalar128::ONE).raw().abs() <= EPSILON.raw());
    assert_close(math128::cos(PI), -1.0, 1e-15);
    assert_close(math128::sin(q(-core::f64::consts::FRAC_PI_6)), -0.5, 1e-15);
    assert_close(math128::tan(q(0.5)), libm::tan(0.5), 1e-15);
    assert_eq!(math128::tan(Scalar128::ZERO), Scalar128::ZERO);

    let (s, c) = math128::sin_cos(q(2.0));
    assert_eq!(s, math128::sin(q(2.0)));
    assert_eq!(c, math128::cos(q(2.0)));
}

#[test]
fn tangent_saturates_at_the_pole() {
    assert_eq!(math128::tan(HALF_PI), Scalar128::MAX);
    assert!(math128::tan(-HALF_PI) < q(-1e18));
}

#[test]
fn atan2_quadrants_and_axes() {
    let pi = core::f64::consts::PI;
    assert_close(math128::atan2(i(1), i(1)), pi / 4.0, 1e-15);
    assert_close(math128::atan2(i(1), i(-1)), 3.0 * pi / 4.0, 1e-15);
    assert_close(math128::atan2(i(-1), i(-1)), -3.0 * pi / 4.0, 1e-15);
    assert_close(math128::atan2(i(-1), i(1)), -pi / 4.0, 1e-15);
    assert_close(math128::atan2(i(2), i(1)), libm::atan2(2.0, 1.0), 1e-15);
    assert_close(math128::atan2(i(-2), i(-1)), libm::atan2(-2.0, -1.0), 1e-15);

    assert_eq!(math128::atan2(Scalar128::ZERO, i(5)), Scalar128::ZERO);
    assert_eq!(math128::atan2(Scalar128::ZERO, i(-5)), PI);
    assert_eq!(math128::atan2(Scalar128::ZERO, Scalar128::ZERO), Scalar128::ZERO);
    assert_eq!(math128::atan2(i(3), Scalar128::ZERO), HALF_PI);
    assert_eq!(math128::atan2(i(-3), Scalar128::ZERO), -HALF_PI - Scalar128::EPSILON);
    assert_close(math128::atan(Scalar128::ONE), pi / 4.0, 1e-15);
}

#[test]
fn inverse_sine_and_cosine() {
    let pi = core::f64::consts::PI;
    assert_close(math128::asin(Scalar128::ONE).unwrap_or_default(), pi / 2.0, 1e-15);
    assert_close(math128::asin(-Scalar128::ONE).unwrap_or_default(), -pi / 2.0, 1e-15);
    assert_close(math128::acos(-Scalar128::ONE).unwrap_or_default(), pi, 1e-15);
    assert_eq!(math128::acos(Scalar128::ONE), Ok(Scalar128::ZERO));
    assert_close(math128::asin(q(0.5)).unwrap_or_default(), pi / 6.0, 1e-15);
    assert_close(math128::acos(q(0.5)).unwrap_or_default(), pi / 3.0, 1e-15);
}

#[test]
fn log_with_base_near_one_saturates_by_sign() {
    let base = Scalar128::ONE + Scalar128::EPSILON;
    assert_eq!(math128::log(i(10), base), Ok(Scalar128::MAX));
    assert_eq!(math128::log(q(0.5), base), Ok(Scalar128::MIN));

    let narrow_base = Scalar128::ONE + Scalar128::from_raw(1 << 32);
    let got = math128::log(i(2), narrow_base).unwrap_or_default().to_f64();
    let want = core::f64::consts::LN_2 / libm::log1p(2.0_f64.powi(-32));
    assert!((got / want - 1.0).abs() < 1e-12, "got {got}, want {want}");
}

#[test]
fn domain_errors_name_the_function() {
    assert_domain(math128::sqrt(-Scalar128::EPSILON), "sqrt");
    assert_domain(math128::rsqrt(Scalar128::ZERO), "rsqrt");
    assert_domain(math128::rcp(Scalar128::ZERO), "rcp");
    assert_domain(math128::log2(Scalar128::ZERO), "log2");
    assert_domain(math128::ln(i(-1)), "log2");
    assert_domain(math128::log(i(8), Scalar128::ONE), "log");
    assert_domain(math128::log(i(8), Scalar128::ZERO), "log");
    assert_domain(math128::log(i(-8), i(2)), "log");
    assert_domain(math128::pow(Scalar128::ZERO, i(2)), "pow");
    assert_domain(math128::asin(q(1.5)), "asin");
    assert_domain(math128::acos(q(-1.0001)), "acos");
}

#[test]
fn reciprocal_saturates_for_tiny_arguments() {
    assert_eq!(math128::rcp(Scalar128::EPSILON), Ok(Scalar128::MAX));
    assert_eq!(math128::rcp(-Scalar128::EPSILON), Ok(Scalar128::MIN));
    assert_eq!(math128::rcp(Scalar128::MIN), Ok(Scalar128::from_raw(-(1 << 1))));
}
