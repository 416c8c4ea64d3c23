// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use detfix::{FixedError, Scalar128, Scalar64};

#[test]
fn constants_and_raw_encoding() {
    assert_eq!(Scalar64::ZERO.raw(), 0);
    assert_eq!(Scalar64::ONE.raw(), 1_i64 << 32);
    assert_eq!(Scalar64::HALF.raw(), 1_i64 << 31);
    assert_eq!(Scalar64::EPSILON.raw(), 1);
    assert_eq!(Scalar64::MAX.raw(), i64::MAX);
    assert_eq!(Scalar64::MIN.raw(), i64::MIN);
    assert_eq!(Scalar64::default(), Scalar64::ZERO);
}

#[test]
fn integer_conversions() {
    assert_eq!(Scalar64::from(3).raw(), 3_i64 << 32);
    assert_eq!(Scalar64::from(-7_i16).to_i32(), -7);
    assert_eq!(Scalar64::from_f64(-2.5).to_i64(), -3, "integer part floors");
    assert_eq!(Scalar64::try_from(1_i64 << 31), Err(FixedError::OutOfRange));
    assert_eq!(Scalar64::try_from(i64::from(i32::MIN)), Ok(Scalar64::from(i32::MIN)));
    assert_eq!(Scalar64::try_from(u64::MAX), Err(FixedError::OutOfRange));
    assert_eq!(Scalar64::try_from(12_u32), Ok(Scalar64::from(12)));
    // Wrapping conversion keeps the low 32 integer bits.
    assert_eq!(Scalar64::from_i64((1_i64 << 32) + 5), Scalar64::from(5));
}

#[test]
fn float_conversions_truncate_and_saturate() {
    assert_eq!(Scalar64::from_f64(0.5).raw(), 1_i64 << 31);
    assert_eq!(Scalar64::from_f64(-0.0).raw(), 0);
    assert_eq!(Scalar64::from_f64(f64::INFINITY), Scalar64::MAX);
    assert_eq!(Scalar64::from_f64(f64::NEG_INFINITY), Scalar64::MIN);
    assert_eq!(Scalar64::from_f64(f64::NAN), Scalar64::ZERO);
    assert_eq!(Scalar64::from_f64(1e12), Scalar64::MAX);
    assert_eq!(Scalar64::from_f32(1.5).to_f32(), 1.5);
    // Below one epsilon truncates toward zero.
    assert_eq!(Scalar64::from_f64(-1e-12), Scalar64::ZERO);
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_eq!(Scalar64::MAX + Scalar64::EPSILON, Scalar64::MIN);
    assert_eq!(Scalar64::MIN - Scalar64::EPSILON, Scalar64::MAX);
    assert_eq!(-Scalar64::MIN, Scalar64::MIN);
    assert_eq!(Scalar64::MAX.checked_add(Scalar64::EPSILON), None);
    assert_eq!(Scalar64::MAX.saturating_add(Scalar64::ONE), Scalar64::MAX);
    assert_eq!(Scalar64::MIN.saturating_sub(Scalar64::ONE), Scalar64::MIN);
    let big = Scalar64::from(1 << 20);
    assert_eq!(big.checked_mul(big), None);
    assert_eq!(Scalar64::from(-3).checked_mul(Scalar64::HALF), Some(Scalar64::from_f64(-1.5)));
}

#[test]
fn multiplication_truncates_toward_negative_infinity() {
    let third = Scalar64::from_raw(0x5555_5555);
    assert_eq!(third * Scalar64::from(3), Scalar64::from_raw(0xffff_ffff));
    assert_eq!(Scalar64::from_f64(2.5) * Scalar64::from_f64(-4.0), Scalar64::from(-10));
    assert_eq!(Scalar64::EPSILON * Scalar64::HALF, Scalar64::ZERO);
    assert_eq!(-Scalar64::EPSILON * Scalar64::HALF, -Scalar64::EPSILON);
}

#[test]
fn one_third_times_three_is_within_epsilon_of_one() {
    let third = Scalar64::from(1) / Scalar64::from(3);
    let back = third * Scalar64::from(3);
    assert!((back - Scalar64::ONE).raw().abs() <= Scalar64::EPSILON.raw());
}

#[test]
fn division_rounds_to_nearest() {
    assert_eq!(Scalar64::from(7) / Scalar64::from(2), Scalar64::from_f64(3.5));
    assert_eq!(Scalar64::from(-7) / Scalar64::from(2), Scalar64::from_f64(-3.5));
    assert_eq!(Scalar64::from(2) / Scalar64::from(3), Scalar64::from_raw(0xaaaa_aaab));
    assert_eq!(Scalar64::from(-2) / Scalar64::from(3), Scalar64::from_raw(-0xaaaa_aaab));
    assert_eq!(Scalar64::from(1) / Scalar64::from(-1), Scalar64::from(-1));
    assert_eq!(Scalar64::ZERO / Scalar64::from(9), Scalar64::ZERO);
}

#[test]
fn division_saturates_instead_of_wrapping() {
    assert_eq!(Scalar64::MAX / Scalar64::EPSILON, Scalar64::MAX);
    assert_eq!(Scalar64::MIN / Scalar64::EPSILON, Scalar64::MIN);
    assert_eq!(Scalar64::MAX / -Scalar64::EPSILON, Scalar64::MIN);
    assert_eq!(Scalar64::MAX / Scalar64::ONE, Scalar64::MAX);
    assert_eq!(Scalar64::MIN / Scalar64::ONE, Scalar64::MIN);
    assert_eq!(Scalar64::MIN / -Scalar64::ONE, Scalar64::MAX);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(Scalar64::ONE.checked_div(Scalar64::ZERO), Err(FixedError::DivideByZero));
    assert_eq!(Scalar64::ONE.checked_rem(Scalar64::ZERO), Err(FixedError::DivideByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_operator_panics_on_zero() {
    let _ = Scalar64::ONE / Scalar64::ZERO;
}

#[test]
fn remainder_takes_the_sign_of_the_dividend() {
    let r = Scalar64::from_f64(5.5) % Scalar64::from(2);
    assert_eq!(r, Scalar64::from_f64(1.5));
    let r = Scalar64::from_f64(-5.5) % Scalar64::from(2);
    assert_eq!(r, Scalar64::from_f64(-1.5));
    let r = Scalar64::from_f64(5.5) % Scalar64::from(-2);
    assert_eq!(r, Scalar64::from_f64(1.5));
}

#[test]
fn shifts_mask_their_count() {
    assert_eq!(Scalar64::ONE << 1, Scalar64::TWO);
    assert_eq!(Scalar64::ONE >> 1, Scalar64::HALF);
    assert_eq!(Scalar64::ONE << 65, Scalar64::TWO);
    assert_eq!(Scalar64::from(-4) >> 1, Scalar64::from(-2));
}

#[test]
fn compound_assignment_matches_binary_operators() {
    let mut x = Scalar64::from(10);
    x += Scalar64::from(2);
    x -= Scalar64::HALF;
    x *= Scalar64::TWO;
    x /= Scalar64::from(23);
    assert_eq!(x, Scalar64::ONE);
}

#[test]
fn ordering_follows_the_value() {
    let mut values = vec![
        Scalar64::from(3),
        Scalar64::MIN,
        Scalar64::from_f64(-0.25),
        Scalar64::ZERO,
        Scalar64::MAX,
    ];
    values.sort();
    assert_eq!(
        values,
        vec![
            Scalar64::MIN,
            Scalar64::from_f64(-0.25),
            Scalar64::ZERO,
            Scalar64::from(3),
            Scalar64::MAX,
        ]
    );
}

#[test]
fn byte_encoding_is_little_endian_raw() {
    let x = Scalar64::from_f64(-1.25);
    assert_eq!(x.to_le_bytes(), x.raw().to_le_bytes());
    assert_eq!(Scalar64::from_le_bytes(x.to_le_bytes()), x);
    assert_eq!(bytemuck::bytes_of(&x), &x.raw().to_ne_bytes()[..]);
}

#[test]
fn widening_to_scalar128_is_exact() {
    let x = Scalar64::from_raw(-0x1234_5678_9abc);
    let wide = Scalar128::from(x);
    assert_eq!(wide.raw(), i128::from(x.raw()) << 32);
    assert_eq!(wide.to_scalar64(), x);
}

#[test]
fn display_goes_through_f64() {
    assert_eq!(Scalar64::from_f64(1.5).to_string(), "1.5");
    assert_eq!(format!("{:.3}", Scalar64::from(-2)), "-2.000");
}
