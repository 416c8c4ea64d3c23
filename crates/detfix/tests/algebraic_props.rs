// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Algebraic laws of the scalar types: round trips, commutativity, division
//! as an inverse of multiplication, sign laws, and idempotent rounding.

use detfix::math::{math128, math64};
use detfix::{Scalar128, Scalar64};
use proptest::prelude::*;

fn signed(raw: i64, negative: bool) -> i64 {
    if negative {
        -raw
    } else {
        raw
    }
}

proptest! {
    #[test]
    fn integers_round_trip_through_both_widths(n in any::<i32>(), m in any::<i64>()) {
        let narrow = Scalar64::from(n);
        prop_assert_eq!(narrow.to_i32(), n);
        prop_assert_eq!(Scalar128::from(narrow).to_scalar64(), narrow);
        prop_assert_eq!(Scalar128::from(m).to_i64(), m);
    }

    #[test]
    fn addition_and_multiplication_commute(
        a in -(1_i64 << 46)..(1_i64 << 46),
        b in -(1_i64 << 46)..(1_i64 << 46),
    ) {
        let (x, y) = (Scalar64::from_raw(a), Scalar64::from_raw(b));
        prop_assert_eq!(x + y, y + x);
        prop_assert_eq!(x * y, y * x);

        let (x, y) = (Scalar128::from_raw(i128::from(a) << 40), Scalar128::from_raw(i128::from(b) << 40));
        prop_assert_eq!(x + y, y + x);
        prop_assert_eq!(x * y, y * x);
    }

    #[test]
    fn scalar64_division_inverts_multiplication(
        a in -(1_i64 << 44)..(1_i64 << 44),
        b in (1_i64 << 16)..=(1_i64 << 32),
        negative in any::<bool>(),
    ) {
        let x = Scalar64::from_raw(a);
        let y = Scalar64::from_raw(signed(b, negative));
        let back = (x / y) * y;
        prop_assert!((back.raw() - a).abs() <= Scalar64::EPSILON.raw(), "{x} / {y} * {y} = {back}");
    }

    #[test]
    fn scalar128_division_inverts_multiplication(
        a in -(1_i128 << 100)..(1_i128 << 100),
        b in (1_i128 << 40)..=(1_i128 << 64),
        negative in any::<bool>(),
    ) {
        let x = Scalar128::from_raw(a);
        let y = Scalar128::from_raw(if negative { -b } else { b });
        let back = (x / y) * y;
        prop_assert!((back.raw() - a).abs() <= Scalar128::EPSILON.raw());
    }

    #[test]
    fn quotient_sign_is_xor_of_operand_signs(
        a in (1_i64 << 32)..(1_i64 << 50),
        b in (1_i64 << 20)..(1_i64 << 40),
        neg_a in any::<bool>(),
        neg_b in any::<bool>(),
    ) {
        let x = Scalar64::from_raw(signed(a, neg_a));
        let y = Scalar64::from_raw(signed(b, neg_b));
        prop_assert_eq!((x / y).is_negative(), neg_a != neg_b);

        let x = Scalar128::from(x);
        let y = Scalar128::from(y);
        prop_assert_eq!((x / y).is_negative(), neg_a != neg_b);
    }

    #[test]
    fn double_negation_is_identity(raw in any::<i64>(), wide in any::<i128>()) {
        let x = Scalar64::from_raw(raw);
        prop_assert_eq!(-(-x), x);
        let y = Scalar128::from_raw(wide);
        prop_assert_eq!(-(-y), y);
    }

    #[test]
    fn floor_is_idempotent(raw in any::<i64>(), wide in any::<i128>()) {
        let x = Scalar64::from_raw(raw);
        prop_assert_eq!(math64::floor(math64::floor(x)), math64::floor(x));
        let y = Scalar128::from_raw(wide);
        prop_assert_eq!(math128::floor(math128::floor(y)), math128::floor(y));
    }
}
