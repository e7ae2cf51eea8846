//! Inverse standard-normal CDF.
//!
//! Rational-polynomial approximation in three regions: a central region
//! around the median and two mirrored tails. No refinement step is applied.

/// Central-region numerator coefficients.
const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Central-region denominator coefficients.
const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Tail numerator coefficients.
const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Tail denominator coefficients.
const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Boundary between the low tail and the central region.
const P_LOW: f64 = 0.02425;

/// Boundary between the central region and the high tail.
const P_HIGH: f64 = 1.0 - P_LOW;

/// Returned for `p <= 0` in place of negative infinity.
pub const LOWER_SENTINEL: f64 = -10.0;

/// Returned for `p >= 1` in place of positive infinity.
pub const UPPER_SENTINEL: f64 = 10.0;

/// Standard-normal quantile of probability `p`.
///
/// Out-of-range probabilities clamp to [`LOWER_SENTINEL`] and
/// [`UPPER_SENTINEL`].
#[must_use]
pub fn quantile(p: f64) -> f64 {
    if p <= 0.0 {
        return LOWER_SENTINEL;
    }
    if p >= 1.0 {
        return UPPER_SENTINEL;
    }

    if p < P_LOW {
        tail(p)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail(1.0 - p)
    }
}

/// Low-tail formula; the high tail is its negated mirror.
fn tail(p: f64) -> f64 {
    let q = (-2.0 * p.ln()).sqrt();
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}
