//! Adaptive Curve IRM Simulation SDK
//!
//! This crate projects how a lending protocol's adaptive borrow-interest
//! curve evolves over a future time horizon, assuming utilization stays
//! constant. It implements the curve valuation formula, its closed-form
//! inverse, the exponential adaptation of the rate at target with bound
//! clamping, and the three-sample interval average used for charting.
//!
//! # Overview
//!
//! The simulation SDK allows you to:
//! - Evaluate the convex borrow-rate curve and its exact inverse
//! - Normalize a utilization reading into a signed error against the target
//! - Evolve the rate at target through time under sustained error
//! - Project a full trajectory of independent, closed-form samples
//!
//! # Example
//!
//! ```rust
//! use irm_rs_sim::{CurveParameters, Horizon, HorizonSimulator, RateObservation, TimeUnit};
//!
//! // 80% utilization, 5% observed borrow rate, projected over 240 hours
//! let sim = HorizonSimulator::new(
//!     CurveParameters::default(),
//!     80.0,
//!     RateObservation::BorrowRate(5.0),
//! )?;
//!
//! let points = sim.run_horizon(Horizon { length: 240, unit: TimeUnit::Hours });
//! assert_eq!(points.len(), 241);
//!
//! // Below target, the rate drifts down over the horizon
//! assert!(points[240].end_borrow_rate < points[0].end_borrow_rate);
//! # Ok::<(), irm_rs_sim::IrmError>(())
//! ```

pub mod adapt;
pub mod config;
pub mod curve;
pub mod error;
pub mod simulate;

// Re-export commonly used types
pub use error::IrmError;

// Config exports
pub use config::{
    CurveParameters, ADJUSTMENT_SPEED_PER_SECOND, CURVE_STEEPNESS, INITIAL_RATE_AT_TARGET_APR,
    MAX_RATE_AT_TARGET_APR, MIN_RATE_AT_TARGET_APR, SECONDS_PER_YEAR, TARGET_UTILIZATION,
};

// Curve exports
pub use curve::{curve, infer_rate_at_target, normalized_err};

// Adaptation exports
pub use adapt::{adapt_rate_at_target, average_rate_at_target};

// Simulation exports
pub use simulate::{Horizon, HorizonSimulator, RateObservation, SimulationPoint, TimeUnit};
