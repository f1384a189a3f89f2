//! Interval acceptance test
//!
//! Aggregates per-case outcomes into a one-sided test of `H0: p = p0` against
//! `H1: p < p0`, where `p` is the probability that a submitted value falls
//! inside its reference interval. The submission is rejected only when the
//! observed success rate is significantly below `p0`.
//!
//! The decision uses the continuity-corrected score statistic
//!
//! ```text
//! z_obs = (phat - p0 + 1/(2n)) / sqrt(p0 (1 - p0) / n)
//! ```
//!
//! and accepts iff `z_obs >= -z`, with `z = Φ⁻¹(1 - alpha)`. Inverting the same
//! statistic gives the Wilson score interval with continuity correction
//! (Newcombe 1998, method 4), so the decision is equivalent to
//! `p0 <= upper bound`. Both bounds are reported alongside the decision.

use crate::{Tally, TestParameters};
use serde::Serialize;

/// Outcome of the acceptance test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Success rate not significantly below `p0`
    Accept,
    /// Success rate significantly below `p0`
    Reject,
}

impl Decision {
    /// Whether the decision is [`Decision::Accept`]
    pub fn is_accept(self) -> bool {
        self == Decision::Accept
    }
}

/// Final accept/reject decision with its supporting statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    /// Accept or reject
    pub decision: Decision,
    /// Observed counts (k, n)
    pub tally: Tally,
    /// Parameters the test ran with
    pub parameters: TestParameters,
    /// One-sided critical value `Φ⁻¹(1 - alpha)`
    pub z_critical: f64,
    /// Continuity-corrected statistic, `None` when no case was observed
    pub z_observed: Option<f64>,
    /// Continuity-corrected Wilson lower bound, `None` when no case was observed
    pub wilson_lower: Option<f64>,
    /// Continuity-corrected Wilson upper bound, `None` when no case was observed
    pub wilson_upper: Option<f64>,
}

/// Run the acceptance test on a complete tally
///
/// With no cases the test has nothing to reject and accepts by convention;
/// callers combine this with the structural diff result.
pub fn evaluate(tally: Tally, parameters: &TestParameters) -> Verdict {
    let z = normal_quantile(1.0 - parameters.alpha());

    let Some(phat) = tally.proportion() else {
        return Verdict {
            decision: Decision::Accept,
            tally,
            parameters: *parameters,
            z_critical: z,
            z_observed: None,
            wilson_lower: None,
            wilson_upper: None,
        };
    };

    let n = tally.cases as f64;
    let p0 = parameters.probability();

    // Step 1: continuity-corrected score statistic
    let numerator = phat - p0 + 1.0 / (2.0 * n);
    let variance = p0 * (1.0 - p0) / n;
    let z_observed = if variance > 0.0 {
        numerator / variance.sqrt()
    } else if numerator >= 0.0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    };

    // Step 2: one-sided decision
    let decision = if z_observed >= -z {
        Decision::Accept
    } else {
        Decision::Reject
    };

    // Step 3: supporting confidence bounds
    let (lower, upper) = wilson_interval(tally.successes, tally.cases, z);

    Verdict {
        decision,
        tally,
        parameters: *parameters,
        z_critical: z,
        z_observed: Some(z_observed),
        wilson_lower: Some(lower),
        wilson_upper: Some(upper),
    }
}

/// Continuity-corrected Wilson score interval (Newcombe 1998, method 4)
fn wilson_interval(successes: u64, trials: u64, z: f64) -> (f64, f64) {
    if trials == 0 {
        return (0.0, 1.0);
    }

    let n = trials as f64;
    let p = successes.min(trials) as f64 / n;
    let z2 = z * z;
    let denominator = 2.0 * (n + z2);

    let lower = if successes == 0 {
        0.0
    } else {
        let radicand = z2 - 2.0 - 1.0 / n + 4.0 * p * (n * (1.0 - p) + 1.0);
        if radicand < 0.0 {
            0.0
        } else {
            (2.0 * n * p + z2 - 1.0 - z * radicand.sqrt()) / denominator
        }
    };

    let upper = if successes >= trials {
        1.0
    } else {
        let radicand = z2 + 2.0 - 1.0 / n + 4.0 * p * (n * (1.0 - p) - 1.0);
        if radicand < 0.0 {
            1.0
        } else {
            (2.0 * n * p + z2 + 1.0 + z * radicand.sqrt()) / denominator
        }
    };

    (lower.clamp(0.0, 1.0), upper.clamp(0.0, 1.0))
}

// Coefficients of Acklam's rational approximation
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];
const P_LOW: f64 = 0.024_25;

/// Standard normal quantile (inverse CDF)
///
/// Acklam's rational approximation, relative error below 1.2e-9 over (0, 1).
/// Returns `-inf` for `p <= 0`, `inf` for `p >= 1` and NaN for NaN.
pub fn normal_quantile(p: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail(q)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail(q)
    }
}

fn tail(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}
