//! Error types for the simulation library.

use thiserror::Error;

/// Errors that can occur when configuring or running a simulation.
///
/// The first four variants are configuration errors and are raised at
/// construction time by [`crate::config::CurveParameters::new`]; the last two
/// reject per-call inputs before any computation runs. Numeric degeneracies in
/// the model itself (zero normalization denominator, zero inversion
/// denominator) are handled by defined substitutions and never surface here.
#[derive(Debug, Error, PartialEq)]
pub enum IrmError {
    /// Curve steepness must exceed 1 for the curve to be convex
    #[error("curve steepness must be greater than 1, got {value}")]
    InvalidSteepness { value: f64 },

    /// Rate-at-target bounds must satisfy min < max
    #[error("invalid rate-at-target bounds: min {min} must be below max {max}")]
    InvalidRateBounds { min: f64, max: f64 },

    /// Adjustment speed must be strictly positive
    #[error("adjustment speed must be positive, got {value}")]
    InvalidAdjustmentSpeed { value: f64 },

    /// Target utilization must lie strictly inside (0, 1)
    #[error("target utilization must be strictly between 0 and 1, got {value}")]
    InvalidTargetUtilization { value: f64 },

    /// Utilization input outside the accepted percent range
    #[error("utilization {value}% is outside the accepted range [0, 100]")]
    UtilizationOutOfRange { value: f64 },

    /// Rate input outside the accepted percent range
    #[error("rate {value}% is outside the accepted range [0, 1000]")]
    RateOutOfRange { value: f64 },
}
