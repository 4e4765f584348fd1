//! Model constants and validated configuration for the Adaptive Curve IRM.
//!
//! The reference parameter set matches the deployed Adaptive Curve IRM:
//! 90% target utilization, steepness 4, adjustment speed 50/year, and
//! rate-at-target bounds of 1% and 100000% APR. [`CurveParameters`] carries
//! these as an explicit immutable value so multiple simulations with
//! different parameters can run side by side.

use crate::error::IrmError;

/// Seconds in a (non-leap) year.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// Target utilization (90%).
pub const TARGET_UTILIZATION: f64 = 0.9;

/// Curve steepness: the borrow rate at 100% utilization is this multiple of
/// the rate at target.
pub const CURVE_STEEPNESS: f64 = 4.0;

/// Adjustment speed of the rate at target, 50 per year expressed per second.
pub const ADJUSTMENT_SPEED_PER_SECOND: f64 = 50.0 / SECONDS_PER_YEAR;

/// Seed rate at target for a fresh market (4% APR).
pub const INITIAL_RATE_AT_TARGET_APR: f64 = 0.04;

/// Floor of the rate at target (1% APR).
pub const MIN_RATE_AT_TARGET_APR: f64 = 0.01;

/// Ceiling of the rate at target (100000% APR).
pub const MAX_RATE_AT_TARGET_APR: f64 = 1000.0;

/// Immutable curve parameters for one simulation run.
///
/// All rates are APR decimals (0.05 = 5% per year). Construct through
/// [`CurveParameters::new`], which rejects invalid configurations before any
/// simulation can run; [`CurveParameters::default`] yields the reference
/// constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    /// Curve steepness, strictly greater than 1
    pub steepness: f64,
    /// Drift speed of the rate at target per second of sustained error
    pub adjustment_speed_per_second: f64,
    /// Lower clamp for the rate at target (APR decimal)
    pub min_rate_at_target: f64,
    /// Upper clamp for the rate at target (APR decimal)
    pub max_rate_at_target: f64,
    /// Utilization at which the borrow rate equals the rate at target
    pub target_utilization: f64,
}

impl CurveParameters {
    /// Builds a parameter set, failing fast on any invalid value.
    pub fn new(
        steepness: f64,
        adjustment_speed_per_second: f64,
        min_rate_at_target: f64,
        max_rate_at_target: f64,
        target_utilization: f64,
    ) -> Result<Self, IrmError> {
        if !steepness.is_finite() || steepness <= 1.0 {
            return Err(IrmError::InvalidSteepness { value: steepness });
        }
        if !adjustment_speed_per_second.is_finite() || adjustment_speed_per_second <= 0.0 {
            return Err(IrmError::InvalidAdjustmentSpeed {
                value: adjustment_speed_per_second,
            });
        }
        if !min_rate_at_target.is_finite()
            || !max_rate_at_target.is_finite()
            || min_rate_at_target >= max_rate_at_target
        {
            return Err(IrmError::InvalidRateBounds {
                min: min_rate_at_target,
                max: max_rate_at_target,
            });
        }
        if !target_utilization.is_finite() || target_utilization <= 0.0 || target_utilization >= 1.0
        {
            return Err(IrmError::InvalidTargetUtilization {
                value: target_utilization,
            });
        }

        Ok(Self {
            steepness,
            adjustment_speed_per_second,
            min_rate_at_target,
            max_rate_at_target,
            target_utilization,
        })
    }

    /// Adjustment speed expressed per year, for reporting.
    pub fn adjustment_speed_per_year(&self) -> f64 {
        self.adjustment_speed_per_second * SECONDS_PER_YEAR
    }
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            steepness: CURVE_STEEPNESS,
            adjustment_speed_per_second: ADJUSTMENT_SPEED_PER_SECOND,
            min_rate_at_target: MIN_RATE_AT_TARGET_APR,
            max_rate_at_target: MAX_RATE_AT_TARGET_APR,
            target_utilization: TARGET_UTILIZATION,
        }
    }
}
