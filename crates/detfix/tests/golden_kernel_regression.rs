// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

//! Bit-exact outputs of the checked-in coefficient tables. Any change to
//! `src/math/lut.rs`, the kernel's reduction steps, or the narrowing rules
//! shows up here first. Regenerate deliberately, never to make CI green.

use detfix::math::{math128, math64};
use detfix::{Scalar128, Scalar64};

fn q(v: f64) -> Scalar128 {
    Scalar128::from_f64(v)
}

fn raw(result: Result<Scalar128, detfix::FixedError>) -> i128 {
    result.map(Scalar128::raw).unwrap_or(i128::MIN)
}

#[test]
fn scalar128_kernel_golden_bits() {
    assert_eq!(raw(math128::sqrt(q(2.0))), 26087635650665564424);
    assert_eq!(raw(math128::rsqrt(q(3.0))), 10650232656628343401);
    assert_eq!(raw(math128::rcp(q(7.0))), 2635249153387078802);
    assert_eq!(raw(math128::log2(q(10.0))), 61278757397652712441);
    assert_eq!(raw(math128::log2(q(1.05))), 1298453917133044543);
    assert_eq!(math128::exp2(q(-2.75)).raw(), 2742124912636209755);
    assert_eq!(math128::exp(q(1.0)).raw(), 50143449209799258500);
    assert_eq!(raw(math128::ln(q(2.5))), 16902580627994557700);
    assert_eq!(math128::sin(q(1.0)).raw(), 15522399902203605024);
    assert_eq!(math128::cos(q(-2.5)).raw(), -14778491242280642905);
    assert_eq!(math128::tan(q(0.75)).raw(), 17184921476562116358);
    assert_eq!(math128::atan2(q(-3.0), q(4.0)).raw(), -11870500265058044197);
    assert_eq!(raw(math128::asin(q(0.3))), 5620587409761368581);
    assert_eq!(raw(math128::acos(q(-0.6))), 40846578097366535053);
    assert_eq!(raw(math128::pow(q(1.5), q(2.25))), 45933025823355188672);
}

#[test]
fn scalar64_kernel_golden_bits() {
    let q = Scalar64::from_f64;
    let raw = |r: Result<Scalar64, detfix::FixedError>| r.map_or(i64::MIN, Scalar64::raw);
    assert_eq!(raw(math64::sqrt(q(2.0))), 6074000999);
    assert_eq!(math64::sin(q(1.0)).raw(), 3614090360);
    assert_eq!(math64::atan2(q(-3.0), q(4.0)).raw(), -2763816218);
    assert_eq!(raw(math64::log2(q(10.0))), 14267572527);
    assert_eq!(math64::exp2(q(-2.75)).raw(), 638450708);
    assert_eq!(raw(math64::pow(q(1.5), q(2.25))), 10694615967);
}
