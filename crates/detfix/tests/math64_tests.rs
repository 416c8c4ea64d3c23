// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use detfix::math::math64::{self, EPSILON, HALF_PI, PI};
use detfix::{FixedError, Scalar64};

fn q(v: f64) -> Scalar64 {
    Scalar64::from_f64(v)
}

fn i(v: i32) -> Scalar64 {
    Scalar64::from(v)
}

#[track_caller]
fn assert_within(got: Scalar64, want: Scalar64, tol: Scalar64) {
    assert!(
        (got - want).raw().abs() <= tol.raw(),
        "got {got}, want {want}"
    );
}

#[test]
fn constants_are_truncated_q63_64_values() {
    assert!((PI.to_f64() - core::f64::consts::PI).abs() < 2.5e-10);
    assert!((HALF_PI.to_f64() - core::f64::consts::FRAC_PI_2).abs() < 2.5e-10);
    assert_eq!(EPSILON.raw(), 1 << 16);
}

#[test]
fn raw_rounding_utilities() {
    assert_eq!(math64::floor(q(-1.5)), i(-2));
    assert_eq!(math64::ceiling(q(-1.5)), i(-1));
    assert_eq!(math64::ceiling(q(1.25)), i(2));
    assert_eq!(math64::ceiling(i(3)), i(3));
    assert_eq!(math64::round(q(2.5)), i(3));
    assert_eq!(math64::round(q(-2.5)), i(-2));
    assert_eq!(math64::round(q(0.49)), Scalar64::ZERO);
    assert_eq!(math64::abs(i(-3)), i(3));
    assert_eq!(math64::abs(i(3)), i(3));
    assert_eq!(math64::abs(Scalar64::MIN), Scalar64::MIN);
}

#[test]
fn selection_utilities() {
    assert_eq!(math64::sign(q(-0.1)), i(-1));
    assert_eq!(math64::sign(Scalar64::ZERO), Scalar64::ZERO);
    assert_eq!(math64::sign(q(7.5)), i(1));
    assert_eq!(math64::min(i(1), i(2)), i(1));
    assert_eq!(math64::max(i(1), i(2)), i(2));
    assert_eq!(math64::clamp(q(2.5), i(0), i(2)), i(2));
    assert_eq!(math64::clamp01(q(0.25)), q(0.25));
    assert_eq!(math64::lerp(i(-4), i(4), Scalar64::HALF), Scalar64::ZERO);
}

#[test]
fn exact_roots_logs_and_right_angle() {
    assert_eq!(math64::sqrt(i(4)), Ok(i(2)));
    assert_eq!(math64::log2(i(8)), Ok(i(3)));
    assert_eq!(math64::pow(i(2), i(10)), Ok(i(1024)));
    let right_angle = math64::sin(math64::deg_to_rad(i(90)));
    assert!((right_angle.to_f64() - 1.0).abs() < 1e-4);
    assert_within(right_angle, Scalar64::ONE, EPSILON);
}

#[test]
fn transcendentals_track_the_wide_kernel() {
    assert_within(math64::sqrt(i(2)).unwrap_or_default(), q(core::f64::consts::SQRT_2), Scalar64::EPSILON);
    assert_within(math64::exp(Scalar64::ONE), q(core::f64::consts::E), Scalar64::EPSILON);
    assert_within(math64::ln(i(10)).unwrap_or_default(), q(core::f64::consts::LN_10), Scalar64::EPSILON);
    assert_within(math64::log10(i(100)).unwrap_or_default(), i(2), Scalar64::EPSILON);
    assert_within(math64::exp10(i(3)), i(1000), Scalar64::EPSILON);
    assert_within(math64::log(i(27), i(3)).unwrap_or_default(), i(3), Scalar64::EPSILON);
    assert_within(math64::cos(PI), i(-1), Scalar64::EPSILON);
    assert_within(math64::atan(Scalar64::ONE), q(core::f64::consts::FRAC_PI_4), Scalar64::EPSILON);
    assert_within(math64::rad_to_deg(PI), i(180), q(1e-7));
    assert_within(math64::rsqrt(q(0.25)).unwrap_or_default(), i(2), Scalar64::ZERO);
    assert_within(math64::tan(q(0.25)), q(libm::tan(0.25)), Scalar64::EPSILON);
    let (s, c) = math64::sin_cos(q(1.0));
    assert_within(s, q(libm::sin(1.0)), Scalar64::EPSILON);
    assert_within(c, q(libm::cos(1.0)), Scalar64::EPSILON);
}

#[test]
fn inverse_trig_and_axes() {
    assert_eq!(math64::asin(Scalar64::ONE), Ok(HALF_PI));
    assert_eq!(math64::acos(-Scalar64::ONE), Ok(PI));
    assert_eq!(math64::atan2(Scalar64::ZERO, i(-2)), PI);
    // Negative results narrow toward negative infinity.
    assert_within(math64::atan2(i(-2), Scalar64::ZERO), -HALF_PI, Scalar64::EPSILON);
    assert_within(math64::acos(Scalar64::HALF).unwrap_or_default(), q(core::f64::consts::FRAC_PI_3), Scalar64::EPSILON);
}

#[test]
fn narrowing_saturates_where_the_kernel_saturates() {
    assert_eq!(math64::rcp(Scalar64::EPSILON), Ok(Scalar64::MAX));
    assert_eq!(math64::rcp(-Scalar64::EPSILON), Ok(Scalar64::MIN));
    assert_eq!(math64::rcp(i(2)), Ok(Scalar64::HALF));
    assert_eq!(math64::exp2(i(40)), Scalar64::MAX);
    assert_eq!(math64::exp2(i(30)), i(1 << 30));
    assert_eq!(math64::exp2(i(-40)), Scalar64::ZERO);
    assert_eq!(math64::pow(i(2), i(40)), Ok(Scalar64::MAX));
    assert_eq!(math64::tan(HALF_PI), Scalar64::MAX);
    assert_eq!(math64::tan(-HALF_PI), Scalar64::MIN);
    let base = Scalar64::ONE + Scalar64::EPSILON;
    assert_eq!(math64::log(i(10), base), Ok(Scalar64::MAX));
    assert_eq!(math64::log(Scalar64::HALF, base), Ok(Scalar64::MIN));
}

#[test]
fn domain_errors_propagate() {
    let invalid = |op| Err(FixedError::InvalidOperation { op });
    assert_eq!(math64::sqrt(i(-1)), invalid("sqrt"));
    assert_eq!(math64::rcp(Scalar64::ZERO), invalid("rcp"));
    assert_eq!(math64::log2(Scalar64::ZERO), invalid("log2"));
    assert_eq!(math64::log(i(2), Scalar64::ONE), invalid("log"));
    assert_eq!(math64::pow(i(-2), i(2)), invalid("pow"));
    assert_eq!(math64::asin(q(1.01)), invalid("asin"));
    assert_eq!(math64::acos(q(-1.01)), invalid("acos"));
}
