//! Time evolution of the rate at target and the interval average.
//!
//! The rate at target drifts exponentially under sustained utilization
//! error: `rate(t) = clamp(start * e^(speed * err * t), min, max)`. Clamping
//! is applied at the evaluation point only; every sample (and the averager's
//! midpoint) is priced independently from the same `t = 0` start value, not
//! stepped along a clamped path. At a given instant this matches the
//! unclamped-then-clamped exponential, which is the defined semantics.

/// Rate at target after `linear_adaptation = speed * err * elapsed_seconds`,
/// clamped to the configured bounds.
pub fn adapt_rate_at_target(
    start_rate_at_target: f64,
    linear_adaptation: f64,
    min_rate_at_target: f64,
    max_rate_at_target: f64,
) -> f64 {
    (start_rate_at_target * linear_adaptation.exp()).clamp(min_rate_at_target, max_rate_at_target)
}

/// Average rate at target over the interval covered by `linear_adaptation`.
///
/// Three-sample quadrature over start, midpoint and end with weights
/// (1, 2, 1) and divisor 4. This weighting is the model's defined averaging
/// rule and is kept as is.
pub fn average_rate_at_target(
    start_rate_at_target: f64,
    linear_adaptation: f64,
    min_rate_at_target: f64,
    max_rate_at_target: f64,
) -> f64 {
    let end = adapt_rate_at_target(
        start_rate_at_target,
        linear_adaptation,
        min_rate_at_target,
        max_rate_at_target,
    );
    let mid = adapt_rate_at_target(
        start_rate_at_target,
        linear_adaptation / 2.0,
        min_rate_at_target,
        max_rate_at_target,
    );
    (start_rate_at_target + end + 2.0 * mid) / 4.0
}
