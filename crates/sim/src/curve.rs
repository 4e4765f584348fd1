//! The convex borrow-rate curve: valuation, error normalization, inversion.
//!
//! The curve pivots at the target utilization. Below target the slope per
//! unit of normalized error is `1 - 1/steepness`; above target it is
//! `steepness - 1`, so the rate rises much faster above target than it
//! falls below it. At zero error the borrow rate equals the rate at target
//! exactly (the kink property).

/// Epsilon substituted for a vanishing inversion denominator.
///
/// `denom == 0` is a defined degenerate case and is approximated rather than
/// treated as an error.
const INVERSION_EPSILON: f64 = 1e-12;

/// Evaluates the curve: maps a rate at target and a normalized error to the
/// borrow rate.
///
/// `curve(r, 0.0, c) == r` exactly for any `r` and `c`.
pub fn curve(rate_at_target: f64, err: f64, steepness: f64) -> f64 {
    let coeff = if err < 0.0 {
        1.0 - 1.0 / steepness
    } else {
        steepness - 1.0
    };
    (coeff * err + 1.0) * rate_at_target
}

/// Normalized distance of utilization from target, in [-1, 1].
///
/// The distance is scaled by the room on the relevant side of the target:
/// `1 - target` above it, `target` below it. A zero denominator (target at
/// exactly 0 or 1, which validated configurations exclude) yields 0.
pub fn normalized_err(utilization: f64, target: f64) -> f64 {
    let norm_factor = if utilization > target {
        1.0 - target
    } else {
        target
    };
    if norm_factor == 0.0 {
        return 0.0;
    }
    (utilization - target) / norm_factor
}

/// Recovers the rate at target from an observed borrow rate.
///
/// Exact algebraic inverse of [`curve`] whenever `coeff * err + 1` is
/// nonzero; the zero case substitutes a small epsilon instead of failing.
pub fn infer_rate_at_target(borrow_rate: f64, err: f64, steepness: f64) -> f64 {
    let coeff = if err < 0.0 {
        1.0 - 1.0 / steepness
    } else {
        steepness - 1.0
    };
    let denom = coeff * err + 1.0;
    let denom = if denom == 0.0 { INVERSION_EPSILON } else { denom };
    borrow_rate / denom
}
