// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Transcendental kernel over Q63.128.
//!
//! Each function normalises its argument into the `[0, 1)` domain of one of
//! the tables in [`super::lut`], evaluates a segment polynomial, and undoes
//! the normalisation with shifts and constant multiplies. The public façades
//! widen their inputs into this module and narrow the result once.

use crate::error::FixedError;
use crate::fp192::Scalar192;

use super::consts::{
    HALF_PI, HALF_SQRT_2, LN_2, LOG10_2, LOG2_10, LOG2_E, LOG2_NEAR_ONE_HIGH,
    LOG2_NEAR_ONE_LOW, PI, QUARTER_TURN_MASK, RCP_HALF_PI, SQRT_2,
};
use super::lut::{
    ATAN_POLY8_LUT64, EXP2_POLY6_LUT16, LOG2_POLY6_LUT64, RCP_POLY8_LUT64, RSQRT_POLY8_LUT64,
    SIN_POLY8_LUT64, SQRT_POLY7_LUT64,
};

const ZERO: Scalar192 = Scalar192::ZERO;
const ONE: Scalar192 = Scalar192::ONE;
const TWO: Scalar192 = Scalar192::TWO;

/// Horner evaluation of the segment polynomial covering `z`.
///
/// `z` is expected in `[0, 1]`; the segment index is clamped so `z == 1`
/// evaluates the last segment at its right edge.
fn poly_lut<const D: usize, const N: usize>(table: &[[Scalar192; D]; N], z: Scalar192) -> Scalar192 {
    let bits = N.trailing_zeros();
    let index = (z.segment(bits) as usize).min(N - 1);
    let t = z - Scalar192::from_words(0, (index as u64) << (64 - bits), 0);

    let coeffs = &table[index];
    let mut y = coeffs[D - 1];
    for &c in coeffs[..D - 1].iter().rev() {
        y = y * t + c;
    }
    y
}

/// `x * 2^exp` with plain shifts.
fn scale(x: Scalar192, exp: i32) -> Scalar192 {
    if exp >= 0 {
        x << exp.unsigned_abs()
    } else {
        x >> exp.unsigned_abs()
    }
}

/// `x * 2^exp`, clamping to `MIN`/`MAX` instead of shifting into the sign.
fn scale_saturating(x: Scalar192, exp: i32) -> Scalar192 {
    if exp > 0 && x.abs_saturating().leading_zeros() <= exp.unsigned_abs() {
        return if x.is_negative() {
            Scalar192::MIN
        } else {
            Scalar192::MAX
        };
    }
    scale(x, exp)
}

/// Splits a positive magnitude into `(n, e)` with `x = n * 2^e`, `n` in `[1, 2)`.
///
/// Treats `x` as unsigned so the magnitude of `MIN` (2^63) normalises too.
fn normalize(x: Scalar192) -> (Scalar192, i32) {
    let exp = 63 - x.leading_zeros() as i32;
    let n = if exp >= 0 {
        x.shr_logical(exp.unsigned_abs())
    } else {
        x << exp.unsigned_abs()
    };
    (n, exp)
}

/// `1 / x` for non-zero `x`.
fn reciprocal(x: Scalar192) -> Scalar192 {
    let negative = x.is_negative();
    let (n, exp) = normalize(if negative { -x } else { x });
    let y = poly_lut(&RCP_POLY8_LUT64, n - ONE);
    scale_saturating(if negative { -y } else { y }, -exp)
}

pub(crate) fn rcp(x: Scalar192) -> Result<Scalar192, FixedError> {
    if x == ZERO {
        return Err(FixedError::domain("rcp"));
    }
    Ok(reciprocal(x))
}

pub(crate) fn sqrt(x: Scalar192) -> Result<Scalar192, FixedError> {
    if x.is_negative() {
        return Err(FixedError::domain("sqrt"));
    }
    if x == ZERO {
        return Ok(ZERO);
    }
    let (n, exp) = normalize(x);
    let mut y = poly_lut(&SQRT_POLY7_LUT64, n - ONE);
    if exp & 1 != 0 {
        y = y * SQRT_2;
    }
    Ok(scale(y, exp >> 1))
}

pub(crate) fn rsqrt(x: Scalar192) -> Result<Scalar192, FixedError> {
    if x <= ZERO {
        return Err(FixedError::domain("rsqrt"));
    }
    let (n, exp) = normalize(x);
    let mut y = poly_lut(&RSQRT_POLY8_LUT64, n - ONE);
    if exp & 1 != 0 {
        y = y * HALF_SQRT_2;
    }
    Ok(scale(y, -(exp >> 1)))
}

/// `2^x`; saturates at the edges of the binary exponent range.
pub(crate) fn exp2(x: Scalar192) -> Scalar192 {
    if x >= Scalar192::from_int(63) {
        return Scalar192::MAX;
    }
    if x <= Scalar192::from_int(-63) {
        return ZERO;
    }
    let y = poly_lut(&EXP2_POLY6_LUT16, x.fraction());
    scale(y, x.floor_int() as i32)
}

pub(crate) fn exp(x: Scalar192) -> Scalar192 {
    exp2(LOG2_E * x)
}

pub(crate) fn exp10(x: Scalar192) -> Scalar192 {
    exp2(LOG2_10 * x)
}

pub(crate) fn log2(x: Scalar192) -> Result<Scalar192, FixedError> {
    if x <= ZERO {
        return Err(FixedError::domain("log2"));
    }
    if x > LOG2_NEAR_ONE_LOW && x < LOG2_NEAR_ONE_HIGH {
        return Ok(log2_near_one(x));
    }
    let (n, exp) = normalize(x);
    let y = poly_lut(&LOG2_POLY6_LUT64, n - ONE);
    Ok(Scalar192::from_int(exp.into()) + y)
}

/// Bit-by-bit log2 for arguments close to one, where the table loses
/// relative accuracy. Squaring the mantissa doubles its log; each time it
/// crosses two, the next output bit is one.
fn log2_near_one(x: Scalar192) -> Scalar192 {
    let (mut m, exp) = normalize(x);
    let mut y = Scalar192::from_int(exp.into());
    let mut bit = Scalar192::HALF;
    for _ in 0..128 {
        m = m * m;
        if m >= TWO {
            m = m >> 1;
            y = y + bit;
        }
        bit = bit >> 1;
    }
    y
}

pub(crate) fn ln(x: Scalar192) -> Result<Scalar192, FixedError> {
    Ok(LN_2 * log2(x)?)
}

pub(crate) fn log10(x: Scalar192) -> Result<Scalar192, FixedError> {
    Ok(LOG10_2 * log2(x)?)
}

/// Logarithm of `x` in an arbitrary `base`.
///
/// Saturates to `MIN`/`MAX` when `base` is so close to one that the quotient
/// leaves the representable range.
pub(crate) fn log(x: Scalar192, base: Scalar192) -> Result<Scalar192, FixedError> {
    if x <= ZERO || base <= ZERO || base == ONE {
        return Err(FixedError::domain("log"));
    }
    Ok(log2(x)?.saturating_mul(reciprocal(log2(base)?)))
}

pub(crate) fn pow(x: Scalar192, e: Scalar192) -> Result<Scalar192, FixedError> {
    if x <= ZERO {
        return Err(FixedError::domain("pow"));
    }
    if x == ONE || e == ZERO {
        return Ok(ONE);
    }
    Ok(exp2(e * log2(x)?))
}

pub(crate) fn sin(x: Scalar192) -> Scalar192 {
    let mut negative = x.is_negative();
    // Quarter turns, reduced into [0, 4).
    let mut q = (x.abs_saturating() * RCP_HALF_PI) & QUARTER_TURN_MASK;
    if q >= TWO {
        q = q - TWO;
        negative = !negative;
    }
    if q >= ONE {
        q = TWO - q;
    }
    let y = poly_lut(&SIN_POLY8_LUT64, q);
    if negative {
        -y
    } else {
        y
    }
}

pub(crate) fn cos(x: Scalar192) -> Scalar192 {
    sin(x + HALF_PI)
}

/// Saturates to `MAX`/`MIN` (by the sign of the sine) where the cosine is
/// exactly zero.
pub(crate) fn tan(x: Scalar192) -> Scalar192 {
    let s = sin(x);
    if s == ZERO {
        return ZERO;
    }
    let c = cos(x);
    if c == ZERO {
        return if s.is_negative() {
            Scalar192::MIN
        } else {
            Scalar192::MAX
        };
    }
    s * reciprocal(c)
}

/// Four-quadrant arctangent in `[-π, π]`.
pub(crate) fn atan2(y: Scalar192, x: Scalar192) -> Scalar192 {
    if y == ZERO {
        return if x.is_negative() { PI } else { ZERO };
    }
    if x == ZERO {
        return if y.is_negative() { -HALF_PI } else { HALF_PI };
    }

    let (sy, sx) = (y.is_negative(), x.is_negative());
    let (ay, ax) = (y.abs_saturating(), x.abs_saturating());

    if ax >= ay {
        let z = poly_lut(&ATAN_POLY8_LUT64, ay * reciprocal(ax));
        let z = if sx == sy { z } else { -z };
        match (sx, sy) {
            (false, _) => z,
            (true, false) => z + PI,
            (true, true) => z - PI,
        }
    } else {
        let z = poly_lut(&ATAN_POLY8_LUT64, ax * reciprocal(ay));
        let z = if sx == sy { z } else { -z };
        (if sy { -HALF_PI } else { HALF_PI }) - z
    }
}

pub(crate) fn atan(x: Scalar192) -> Scalar192 {
    atan2(x, ONE)
}

/// `sqrt((1 + x)(1 - x))`, the cosine of the angle whose sine is `x`.
fn cathetus(x: Scalar192, op: &'static str) -> Result<Scalar192, FixedError> {
    if x < -ONE || x > ONE {
        return Err(FixedError::domain(op));
    }
    sqrt((ONE + x) * (ONE - x))
}

pub(crate) fn asin(x: Scalar192) -> Result<Scalar192, FixedError> {
    Ok(atan2(x, cathetus(x, "asin")?))
}

pub(crate) fn acos(x: Scalar192) -> Result<Scalar192, FixedError> {
    Ok(atan2(cathetus(x, "acos")?, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(v: f64) -> Scalar192 {
        Scalar192::widen(crate::Scalar128::from_f64(v))
    }

    fn assert_close(got: Scalar192, want: f64, tol: f64) {
        let got = got.to_f64();
        assert!((got - want).abs() <= tol, "got {got}, want {want}");
    }

    #[test]
    fn segment_index_clamps_at_right_edge() {
        // sin(π/2) sits at z == 1.0, the right edge of the last segment.
        assert_close(poly_lut(&SIN_POLY8_LUT64, ONE), 1.0, 1e-15);
        assert_close(poly_lut(&SIN_POLY8_LUT64, ZERO), 0.0, 1e-15);
    }

    #[test]
    fn reciprocal_of_min_is_exact() {
        let min = Scalar192::widen(crate::Scalar128::MIN);
        assert_eq!(reciprocal(min), Scalar192::from_int(-1) >> 63);
    }

    #[test]
    fn reciprocal_saturates_instead_of_wrapping() {
        let tiny = Scalar192::from_words(0, 1, 0);
        assert_eq!(reciprocal(tiny), Scalar192::MAX);
        assert_eq!(reciprocal(-tiny), Scalar192::MIN);
    }

    #[test]
    fn log2_paths_agree_at_the_seam() {
        let inside = LOG2_NEAR_ONE_HIGH - Scalar192::from_words(0, 0, 1);
        let table = log2(LOG2_NEAR_ONE_HIGH).map_or(f64::NAN, Scalar192::to_f64);
        let bitwise = log2(inside).map_or(f64::NAN, Scalar192::to_f64);
        assert!((table - bitwise).abs() < 1e-15, "{table} vs {bitwise}");
        assert_close(log2_near_one(q(1.05)), 1.05_f64.log2(), 1e-15);
    }

    #[test]
    fn exp2_saturates_outside_exponent_range() {
        assert_eq!(exp2(Scalar192::from_int(63)), Scalar192::MAX);
        assert_eq!(exp2(Scalar192::from_int(-63)), ZERO);
        assert_eq!(exp2(Scalar192::from_int(10)), Scalar192::from_int(1024));
    }

    #[test]
    fn quadrant_table_covers_axes_and_diagonals() {
        let one = ONE;
        let pi = core::f64::consts::PI;
        assert_close(atan2(one, one), pi / 4.0, 1e-15);
        assert_close(atan2(one, -one), 3.0 * pi / 4.0, 1e-15);
        assert_close(atan2(-one, -one), -3.0 * pi / 4.0, 1e-15);
        assert_close(atan2(-one, one), -pi / 4.0, 1e-15);
        assert_eq!(atan2(ZERO, -one), PI);
        assert_eq!(atan2(-one, ZERO), -HALF_PI);
    }
}
