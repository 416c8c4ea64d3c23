// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Kernel constants at Q63.128 precision, as `(hi, lo, oo)` words.

use crate::fp192::Scalar192;

/// π
pub(crate) const PI: Scalar192 =
    Scalar192::from_words(3, 2611923443488327891, 1376283091369227076);
/// π / 2
pub(crate) const HALF_PI: Scalar192 =
    Scalar192::from_words(1, 10529333758598939753, 9911513582539389346);
/// 2 / π
pub(crate) const RCP_HALF_PI: Scalar192 =
    Scalar192::from_words(0, 11743562013128004905, 18169587780923219393);
/// √2
pub(crate) const SQRT_2: Scalar192 =
    Scalar192::from_words(1, 7640891576956012808, 12896923290648804670);
/// √2 / 2
pub(crate) const HALF_SQRT_2: Scalar192 =
    Scalar192::from_words(0, 13043817825332782212, 6448461645324402335);
/// ln 2
pub(crate) const LN_2: Scalar192 =
    Scalar192::from_words(0, 12786308645202655659, 14547668686819489455);
/// log2 e
pub(crate) const LOG2_E: Scalar192 =
    Scalar192::from_words(1, 8166282121979094257, 16131891943319421812);
/// log2 10
pub(crate) const LOG2_10: Scalar192 =
    Scalar192::from_words(3, 5938525176524057593, 2643573386881494324);
/// log10 2
pub(crate) const LOG10_2: Scalar192 =
    Scalar192::from_words(0, 5553023288523357132, 5171448307347507388);
/// 180 / π
pub(crate) const RAD_TO_DEG: Scalar192 =
    Scalar192::from_words(57, 5456168980075999426, 11949421796649203136);
/// π / 180
pub(crate) const DEG_TO_RAD: Scalar192 =
    Scalar192::from_words(0, 321956420358983237, 8103717027302354470);

/// Open interval `(0.999, 1.1)` where log2 switches to bit extraction.
pub(crate) const LOG2_NEAR_ONE_LOW: Scalar192 = Scalar192::from_words(0, 18428297329635842048, 0);
pub(crate) const LOG2_NEAR_ONE_HIGH: Scalar192 = Scalar192::from_words(1, 1844674407370956800, 0);

/// Keeps the two low integer bits and the whole fraction: reduces a
/// quarter-turn count into `[0, 4)`.
pub(crate) const QUARTER_TURN_MASK: Scalar192 = Scalar192::from_words(3, u64::MAX, u64::MAX);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_float_references() {
        let close = |a: Scalar192, b: f64| (a.to_f64() - b).abs() <= b.abs() * 1e-15;
        assert!(close(PI, core::f64::consts::PI));
        assert!(close(HALF_PI, core::f64::consts::FRAC_PI_2));
        assert!(close(RCP_HALF_PI, core::f64::consts::FRAC_2_PI));
        assert!(close(SQRT_2, core::f64::consts::SQRT_2));
        assert!(close(HALF_SQRT_2, core::f64::consts::FRAC_1_SQRT_2));
        assert!(close(LN_2, core::f64::consts::LN_2));
        assert!(close(LOG2_E, core::f64::consts::LOG2_E));
        assert!(close(LOG2_10, core::f64::consts::LOG2_10));
        assert!(close(LOG10_2, core::f64::consts::LOG10_2));
        assert!(close(RAD_TO_DEG, 180.0 / core::f64::consts::PI));
        assert!(close(DEG_TO_RAD, core::f64::consts::PI / 180.0));
        assert!(close(LOG2_NEAR_ONE_LOW, 0.999));
        assert!(close(LOG2_NEAR_ONE_HIGH, 1.1));
    }
}
