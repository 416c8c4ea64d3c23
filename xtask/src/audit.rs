// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Accuracy audit: sweeps each kernel function at both widths and compares
//! against libm in `f64`.
//!
//! The error metric is `|got - want| / max(1, |want|)`, absolute near zero
//! and relative for large results. Sample points are evenly spaced and then
//! snapped to the Q31.32 grid so both widths see identical inputs and the
//! oracle is evaluated at exactly the value the kernel received.

use anyhow::{bail, Result};
use clap::Args;
use detfix::math::{math128, math64};
use detfix::{FixedError, Scalar128, Scalar64};

#[derive(Args)]
pub(crate) struct AuditArgs {
    /// Samples per function.
    #[arg(long, default_value_t = 4096)]
    samples: u32,

    /// Largest tolerated Q63.64 error before the audit fails.
    #[arg(long, default_value_t = 1e-14)]
    max_error_128: f64,

    /// Largest tolerated Q31.32 error before the audit fails.
    #[arg(long, default_value_t = 1e-8)]
    max_error_64: f64,

    /// Only audit functions whose name contains this string.
    #[arg(long)]
    filter: Option<String>,
}

type Wide = fn(Scalar128, Scalar128) -> Result<Scalar128, FixedError>;
type Narrow = fn(Scalar64, Scalar64) -> Result<Scalar64, FixedError>;

struct Probe {
    name: &'static str,
    x: (f64, f64),
    /// Second operand range; `None` for unary functions.
    y: Option<(f64, f64)>,
    wide: Wide,
    narrow: Narrow,
    oracle: fn(f64, f64) -> f64,
}

#[derive(Default)]
struct Worst {
    error: f64,
    x: f64,
    y: f64,
    failures: u32,
}

impl Worst {
    fn record(&mut self, x: f64, y: f64, got: Result<f64, FixedError>, want: f64) {
        let Ok(got) = got else {
            self.failures += 1;
            return;
        };
        let error = (got - want).abs() / want.abs().max(1.0);
        if error > self.error {
            *self = Self { error, x, y, failures: self.failures };
        }
    }
}

macro_rules! unary {
    ($name:literal, $lo:expr, $hi:expr, checked $f:ident, $oracle:path) => {
        Probe {
            name: $name,
            x: ($lo, $hi),
            y: None,
            wide: |x, _| math128::$f(x),
            narrow: |x, _| math64::$f(x),
            oracle: |x, _| $oracle(x),
        }
    };
    ($name:literal, $lo:expr, $hi:expr, $f:ident, $oracle:path) => {
        Probe {
            name: $name,
            x: ($lo, $hi),
            y: None,
            wide: |x, _| Ok(math128::$f(x)),
            narrow: |x, _| Ok(math64::$f(x)),
            oracle: |x, _| $oracle(x),
        }
    };
}

fn recip(x: f64) -> f64 {
    1.0 / x
}

fn inv_sqrt(x: f64) -> f64 {
    1.0 / libm::sqrt(x)
}

fn probes() -> Vec<Probe> {
    vec![
        unary!("rcp", 0.001, 1000.0, checked rcp, recip),
        unary!("sqrt", 0.0, 1.0e6, checked sqrt, libm::sqrt),
        unary!("rsqrt", 1.0e-4, 1.0e6, checked rsqrt, inv_sqrt),
        unary!("exp2", -30.0, 30.0, exp2, libm::exp2),
        unary!("exp", -20.0, 20.0, exp, libm::exp),
        unary!("exp10", -9.0, 9.0, exp10, libm::exp10),
        unary!("log2", 1.0e-4, 1.0e6, checked log2, libm::log2),
        unary!("ln", 1.0e-4, 1.0e6, checked ln, libm::log),
        unary!("log10", 1.0e-4, 1.0e6, checked log10, libm::log10),
        unary!("sin", -100.0, 100.0, sin, libm::sin),
        unary!("cos", -100.0, 100.0, cos, libm::cos),
        unary!("tan", -1.5, 1.5, tan, libm::tan),
        unary!("atan", -1000.0, 1000.0, atan, libm::atan),
        unary!("asin", -1.0, 1.0, checked asin, libm::asin),
        unary!("acos", -1.0, 1.0, checked acos, libm::acos),
        Probe {
            name: "atan2",
            x: (-100.0, 100.0),
            y: Some((-100.0, 100.0)),
            wide: |y, x| Ok(math128::atan2(y, x)),
            narrow: |y, x| Ok(math64::atan2(y, x)),
            oracle: libm::atan2,
        },
        Probe {
            name: "pow",
            x: (0.01, 100.0),
            y: Some((-3.0, 3.0)),
            wide: math128::pow,
            narrow: math64::pow,
            oracle: libm::pow,
        },
    ]
}

/// `i`-th of `n` evenly spaced points in `[lo, hi]`, snapped to the Q31.32 grid.
fn sample(range: (f64, f64), i: u32, n: u32) -> Scalar64 {
    let t = f64::from(i) / f64::from(n.max(2) - 1);
    Scalar64::from_f64(range.0 + (range.1 - range.0) * t)
}

fn sweep(probe: &Probe, samples: u32) -> (Worst, Worst) {
    let mut wide = Worst::default();
    let mut narrow = Worst::default();
    for i in 0..samples {
        let x = sample(probe.x, i, samples);
        // Second operand runs backwards so pairs cover mixed signs.
        let y = probe
            .y
            .map_or(Scalar64::ZERO, |range| sample(range, samples - 1 - i, samples));
        let (xf, yf) = (x.to_f64(), y.to_f64());
        let want = (probe.oracle)(xf, yf);
        if !want.is_finite() {
            continue;
        }
        let got128 = (probe.wide)(Scalar128::from(x), Scalar128::from(y)).map(Scalar128::to_f64);
        let got64 = (probe.narrow)(x, y).map(Scalar64::to_f64);
        wide.record(xf, yf, got128, want);
        narrow.record(xf, yf, got64, want);
    }
    (wide, narrow)
}

pub(crate) fn run(args: &AuditArgs) -> Result<()> {
    let mut failed = Vec::new();
    for probe in probes() {
        if args.filter.as_deref().is_some_and(|f| !probe.name.contains(f)) {
            continue;
        }
        let (wide, narrow) = sweep(&probe, args.samples);
        for (width, worst, limit) in [
            ("Q63.64", &wide, args.max_error_128),
            ("Q31.32", &narrow, args.max_error_64),
        ] {
            let ok = worst.failures == 0 && worst.error <= limit;
            if ok {
                tracing::info!(
                    function = probe.name,
                    width,
                    max_error = worst.error,
                    x = worst.x,
                    y = worst.y,
                    "ok"
                );
            } else {
                tracing::error!(
                    function = probe.name,
                    width,
                    max_error = worst.error,
                    limit,
                    failures = worst.failures,
                    x = worst.x,
                    y = worst.y,
                    "accuracy regression"
                );
                failed.push(format!("{}@{width}", probe.name));
            }
        }
    }
    if !failed.is_empty() {
        bail!("audit failed for: {}", failed.join(", "));
    }
    Ok(())
}
