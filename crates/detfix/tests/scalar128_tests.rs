// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use detfix::{FixedError, Scalar128, Scalar64};

#[test]
fn words_address_integer_and_fraction() {
    assert_eq!(Scalar128::ONE.hi(), 1);
    assert_eq!(Scalar128::ONE.lo(), 0);
    assert_eq!(Scalar128::HALF.lo(), 1 << 63);

    let neg_quarter = Scalar128::from_f64(-0.25);
    assert_eq!(neg_quarter.hi(), u64::MAX);
    assert_eq!(neg_quarter.lo(), 3 << 62);
    assert_eq!(Scalar128::from_words(neg_quarter.hi(), neg_quarter.lo()), neg_quarter);
}

#[test]
fn integer_conversions() {
    assert_eq!(Scalar128::from(i64::MIN).to_i64(), i64::MIN);
    assert_eq!(Scalar128::from(-9_i32).to_i32(), -9);
    assert_eq!(Scalar128::from(7_u32).to_i64(), 7);
    assert_eq!(Scalar128::try_from(u64::MAX), Err(FixedError::OutOfRange));
    assert_eq!(Scalar128::try_from(42_u64), Ok(Scalar128::from(42)));
    // The unchecked form wraps into the sign bit.
    assert!(Scalar128::from_u64(u64::MAX).is_negative());
    assert_eq!(Scalar128::from_u64(u64::MAX), -Scalar128::ONE);
}

#[test]
fn float_conversions_truncate_and_saturate() {
    assert_eq!(Scalar128::from_f64(1.0), Scalar128::ONE);
    assert_eq!(Scalar128::from_f64(f64::INFINITY), Scalar128::MAX);
    assert_eq!(Scalar128::from_f64(f64::NEG_INFINITY), Scalar128::MIN);
    assert_eq!(Scalar128::from_f64(f64::NAN), Scalar128::ZERO);
    assert_eq!(Scalar128::from_f64(1e30), Scalar128::MAX);
    assert!((Scalar128::from_f64(-1234.5678).to_f64() + 1234.5678).abs() < 1e-12);
    assert_eq!(Scalar128::from_f32(0.75).to_f32(), 0.75);
}

#[test]
fn narrowing_to_scalar64() {
    let x = Scalar128::from_f64(3.75);
    assert_eq!(x.to_scalar64(), Scalar64::from_f64(3.75));
    // Low fraction bits floor away.
    assert_eq!((-Scalar128::EPSILON).to_scalar64(), -Scalar64::EPSILON);
    assert_eq!(Scalar128::EPSILON.to_scalar64(), Scalar64::ZERO);
    // Out of range wraps; the saturating form clamps.
    let big = Scalar128::from(1_i64 << 40);
    assert_eq!(big.to_scalar64(), Scalar64::ZERO);
    assert_eq!(big.to_scalar64_saturating(), Scalar64::MAX);
    assert_eq!((-big).to_scalar64_saturating(), Scalar64::MIN);
}

#[test]
fn addition_carries_between_words() {
    let almost_one = Scalar128::from_words(0, u64::MAX);
    assert_eq!(almost_one + Scalar128::EPSILON, Scalar128::ONE);
    assert_eq!(Scalar128::ZERO - Scalar128::EPSILON, Scalar128::from_words(u64::MAX, u64::MAX));
    assert_eq!(Scalar128::MAX + Scalar128::EPSILON, Scalar128::MIN);
    assert_eq!(Scalar128::MAX.checked_add(Scalar128::EPSILON), None);
    assert_eq!(Scalar128::MIN.checked_sub(Scalar128::EPSILON), None);
    assert_eq!(Scalar128::MAX.saturating_add(Scalar128::ONE), Scalar128::MAX);
}

#[test]
fn multiplication_is_sign_magnitude() {
    let a = Scalar128::from_f64(1.5);
    let b = Scalar128::from_f64(-2.25);
    assert_eq!(a * b, Scalar128::from_f64(-3.375));
    assert_eq!(b * b, Scalar128::from_f64(5.0625));
    let third = Scalar128::ONE / Scalar128::from(3);
    assert_eq!(third * Scalar128::from(3), Scalar128::from_words(0, u64::MAX));
    assert_eq!(-third * Scalar128::from(3), -Scalar128::from_words(0, u64::MAX));
}

#[test]
fn division_matches_double_reference() {
    let q = Scalar128::from(4567) / Scalar128::from(1234);
    assert!((q.to_f64() - 4567.0 / 1234.0).abs() < 1e-15);
    assert_eq!(Scalar128::from(2) / Scalar128::ONE, Scalar128::from(2));
    assert_eq!(Scalar128::from(-7) / Scalar128::from(2), Scalar128::from_f64(-3.5));
    assert_eq!(
        Scalar128::ONE / Scalar128::from(3),
        Scalar128::from_words(0, 0x5555_5555_5555_5555)
    );
}

#[test]
fn division_saturates_instead_of_wrapping() {
    assert_eq!(Scalar128::MAX / Scalar128::EPSILON, Scalar128::MAX);
    assert_eq!(Scalar128::MIN / Scalar128::EPSILON, Scalar128::MIN);
    assert_eq!(Scalar128::MIN / -Scalar128::EPSILON, Scalar128::MAX);
    assert_eq!(Scalar128::MIN / -Scalar128::ONE, Scalar128::MAX);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(Scalar128::ONE.checked_div(Scalar128::ZERO), Err(FixedError::DivideByZero));
    assert_eq!(Scalar128::ONE.checked_rem(Scalar128::ZERO), Err(FixedError::DivideByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn remainder_operator_panics_on_zero() {
    let _ = Scalar128::ONE % Scalar128::ZERO;
}

#[test]
fn remainder_takes_the_sign_of_the_dividend() {
    let r = Scalar128::from_f64(-7.25) % Scalar128::from(3);
    assert_eq!(r, Scalar128::from_f64(-1.25));
    assert_eq!(Scalar128::MIN % -Scalar128::EPSILON, Scalar128::ZERO);
}

#[test]
fn bitwise_operators_act_on_raw_words() {
    let x = Scalar128::from_words(0xf0, 0x0f);
    let y = Scalar128::from_words(0x3c, 0xff);
    assert_eq!(x & y, Scalar128::from_words(0x30, 0x0f));
    assert_eq!(x | y, Scalar128::from_words(0xfc, 0xff));
    assert_eq!(x ^ y, Scalar128::from_words(0xcc, 0xf0));
    assert_eq!(!Scalar128::ZERO, -Scalar128::EPSILON);
    assert_eq!(Scalar128::ONE << 129, Scalar128::TWO);
    assert_eq!(Scalar128::from(-8) >> 2, Scalar128::from(-2));
}

#[test]
fn byte_encoding_puts_the_fraction_word_first() {
    let x = Scalar128::from_words(0x0102_0304_0506_0708, 0x1112_1314_1516_1718);
    let bytes = x.to_le_bytes();
    assert_eq!(&bytes[..8], &0x1112_1314_1516_1718_u64.to_le_bytes());
    assert_eq!(&bytes[8..], &0x0102_0304_0506_0708_u64.to_le_bytes());
    assert_eq!(Scalar128::from_le_bytes(bytes), x);
}

#[test]
fn display_goes_through_f64() {
    assert_eq!(Scalar128::from_f64(-0.5).to_string(), "-0.5");
    assert_eq!(format!("{:.2}", Scalar128::from(12)), "12.00");
}
