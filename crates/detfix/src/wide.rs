// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-width multi-word primitives shared by the scalar types.
//!
//! Everything here is allocation-free and branch-shape stable: the same
//! inputs walk the same instruction sequence on every target.

/// Full 128×128→256 unsigned product as `(high, low)` halves.
pub(crate) fn mul_wide_u128(a: u128, b: u128) -> (u128, u128) {
    let (a_hi, a_lo) = (a >> 64, a & u128::from(u64::MAX));
    let (b_hi, b_lo) = (b >> 64, b & u128::from(u64::MAX));

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    let (mid, mid_carry) = lh.overflowing_add(hl);
    let (low, low_carry) = ll.overflowing_add(mid << 64);
    let high = hh + (mid >> 64) + (u128::from(mid_carry) << 64) + u128::from(low_carry);
    (high, low)
}

/// Schoolbook product of two little-endian limb slices into `out`.
///
/// `out` must hold `a.len() + b.len()` limbs; it is overwritten.
pub(crate) fn mul_limbs(a: &[u64], b: &[u64], out: &mut [u64]) {
    debug_assert_eq!(out.len(), a.len() + b.len());
    out.fill(0);
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0_u64;
        for (j, &bj) in b.iter().enumerate() {
            let t = u128::from(ai) * u128::from(bj) + u128::from(out[i + j]) + u128::from(carry);
            out[i + j] = t as u64;
            carry = (t >> 64) as u64;
        }
        out[i + b.len()] = carry;
    }
}

/// Fixed-point long division over unsigned magnitudes.
///
/// Computes `dividend / divisor` scaled by `2^frac_bits`, rounded to nearest
/// (ties away from zero). The loop extracts quotient bits most significant
/// first with a budget of `frac_bits + 1` bit positions; trailing zero bits of
/// the divisor are spent from that budget up front. Returns `None` when the
/// quotient does not fit the word, which callers turn into saturation.
///
/// `divisor` must be non-zero and at most `2^(BITS-1)` so the remainder can
/// always be doubled in place.
macro_rules! long_div {
    ($name:ident, $word:ty) => {
        pub(crate) fn $name(dividend: $word, divisor: $word, frac_bits: u32) -> Option<$word> {
            debug_assert!(divisor != 0);
            let mut remainder = dividend;
            let mut quotient: $word = 0;
            let mut bit_pos = frac_bits as i32 + 1;

            let offset = divisor.trailing_zeros().min(frac_bits + 1);
            let divisor = divisor >> offset;
            bit_pos -= offset as i32;

            while remainder != 0 && bit_pos >= 0 {
                let shift = remainder.leading_zeros().min(bit_pos as u32);
                remainder <<= shift;
                bit_pos -= shift as i32;

                let digit = remainder / divisor;
                remainder %= divisor;
                let pos = bit_pos as u32;
                if digit & !(<$word>::MAX >> pos) != 0 {
                    return None;
                }
                quotient = quotient.wrapping_add(digit << pos);

                remainder <<= 1;
                bit_pos -= 1;
            }

            // One guard bit was produced past the target scale.
            Some((quotient >> 1) + (quotient & 1))
        }
    };
}

long_div!(long_div_u64, u64);
long_div!(long_div_u128, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_product_matches_split_reference() {
        let a = u128::MAX;
        let b = u128::MAX;
        let (hi, lo) = mul_wide_u128(a, b);
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        assert_eq!(lo, 1);
        assert_eq!(hi, u128::MAX - 1);

        let (hi, lo) = mul_wide_u128(1 << 64, 1 << 64);
        assert_eq!((hi, lo), (1, 0));
    }

    #[test]
    fn limb_product_agrees_with_native_u128() {
        let a = [0xdead_beef_0123_4567_u64, 0x0000_0000_89ab_cdef];
        let b = [0xffff_ffff_ffff_ffff_u64, 0x0000_0000_0000_0001];
        let mut out = [0_u64; 4];
        mul_limbs(&a, &b, &mut out);

        let na = u128::from(a[0]) | (u128::from(a[1]) << 64);
        let nb = u128::from(b[0]) | (u128::from(b[1]) << 64);
        let (hi, lo) = mul_wide_u128(na, nb);
        assert_eq!(out[0], lo as u64);
        assert_eq!(out[1], (lo >> 64) as u64);
        assert_eq!(out[2], hi as u64);
        assert_eq!(out[3], (hi >> 64) as u64);
    }

    #[test]
    fn long_div_q32_rounds_to_nearest() {
        // 1 / 3 in Q32.32
        assert_eq!(long_div_u64(1 << 32, 3 << 32, 32), Some(0x5555_5555));
        // 2 / 3 rounds the final guard bit up
        assert_eq!(long_div_u64(2 << 32, 3 << 32, 32), Some(0xaaaa_aaab));
        // 7 / 2 is exact
        assert_eq!(long_div_u64(7 << 32, 2 << 32, 32), Some(0x3_8000_0000));
    }

    #[test]
    fn long_div_reports_quotient_overflow() {
        assert_eq!(long_div_u64(u64::MAX >> 1, 1, 32), None);
        assert_eq!(long_div_u128(u128::MAX >> 1, 1, 64), None);
        assert_eq!(long_div_u64(0, 5, 32), Some(0));
    }
}
