//! Horizon simulation: projecting the borrow-rate trajectory through time.
//!
//! A [`HorizonSimulator`] fixes the utilization (and therefore the
//! normalized error) and the starting rate at target once, then prices any
//! elapsed-time sample in closed form from `t = 0`. Points are never chained
//! off one another, so sampling density has no effect on accuracy.

use serde::Serialize;

use crate::adapt::{adapt_rate_at_target, average_rate_at_target};
use crate::config::CurveParameters;
use crate::curve::{curve, infer_rate_at_target, normalized_err};
use crate::error::IrmError;

/// Time axis unit for horizon sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    Days,
}

impl TimeUnit {
    /// Seconds per unit step.
    pub fn seconds(self) -> f64 {
        match self {
            TimeUnit::Hours => 3600.0,
            TimeUnit::Days => 86_400.0,
        }
    }

    /// Axis label for display.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}

/// A future time span sampled at unit granularity.
///
/// Samples are inclusive of both `t = 0` and the horizon endpoint, one per
/// unit step, matching the reference charting behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    /// Number of unit steps in the horizon
    pub length: u32,
    /// Unit of each step
    pub unit: TimeUnit,
}

impl Horizon {
    /// Elapsed seconds at a given step.
    pub fn seconds_at(&self, step: u32) -> f64 {
        f64::from(step) * self.unit.seconds()
    }

    /// Elapsed seconds at the horizon endpoint.
    pub fn total_seconds(&self) -> f64 {
        self.seconds_at(self.length)
    }

    /// The full ordered sample set, `0..=length` steps.
    pub fn sample_seconds(&self) -> Vec<f64> {
        (0..=self.length).map(|step| self.seconds_at(step)).collect()
    }
}

/// The observed rate anchoring the simulation, as percent APR in [0, 1000].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateObservation {
    /// Currently observed borrow rate; the starting rate at target is
    /// recovered by inverting the curve.
    BorrowRate(f64),
    /// Currently observed rate at target, used directly.
    RateAtTarget(f64),
}

impl RateObservation {
    fn percent(self) -> f64 {
        match self {
            RateObservation::BorrowRate(pct) | RateObservation::RateAtTarget(pct) => pct,
        }
    }
}

/// One sample of the projected trajectory. All rates are percent APR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationPoint {
    /// Elapsed time since the observation, in seconds
    pub elapsed_seconds: f64,
    /// Rate at target at this instant
    pub end_rate_at_target: f64,
    /// Average rate at target over `[0, elapsed_seconds]`
    pub avg_rate_at_target: f64,
    /// Borrow rate at this instant
    pub end_borrow_rate: f64,
    /// Average borrow rate over `[0, elapsed_seconds]`
    pub avg_borrow_rate: f64,
}

/// Projects the borrow-rate trajectory under constant utilization.
#[derive(Debug, Clone)]
pub struct HorizonSimulator {
    params: CurveParameters,
    err: f64,
    start_rate_at_target: f64,
}

impl HorizonSimulator {
    /// Builds a simulator from a utilization percentage and an observed rate.
    ///
    /// Validates both inputs against their accepted ranges, derives the
    /// normalized error once (utilization is held constant over the whole
    /// horizon) and resolves the starting rate at target according to the
    /// observation mode.
    pub fn new(
        params: CurveParameters,
        utilization_pct: f64,
        observation: RateObservation,
    ) -> Result<Self, IrmError> {
        if !utilization_pct.is_finite() || !(0.0..=100.0).contains(&utilization_pct) {
            return Err(IrmError::UtilizationOutOfRange {
                value: utilization_pct,
            });
        }
        let rate_pct = observation.percent();
        if !rate_pct.is_finite() || !(0.0..=1000.0).contains(&rate_pct) {
            return Err(IrmError::RateOutOfRange { value: rate_pct });
        }

        let err = normalized_err(utilization_pct / 100.0, params.target_utilization);
        let start_rate_at_target = match observation {
            RateObservation::BorrowRate(pct) => {
                infer_rate_at_target(pct / 100.0, err, params.steepness)
            }
            RateObservation::RateAtTarget(pct) => pct / 100.0,
        };

        Ok(Self {
            params,
            err,
            start_rate_at_target,
        })
    }

    /// Normalized utilization error, fixed for the run.
    pub fn normalized_err(&self) -> f64 {
        self.err
    }

    /// Starting rate at target, percent APR.
    pub fn start_rate_at_target_pct(&self) -> f64 {
        self.start_rate_at_target * 100.0
    }

    /// The parameters this simulator was built with.
    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    /// Prices one elapsed-time sample, in closed form from `t = 0`.
    ///
    /// The average borrow rate applies the curve to the averaged rate at
    /// target, never the other way around.
    pub fn point_at(&self, elapsed_seconds: f64) -> SimulationPoint {
        let p = &self.params;
        let linear_adaptation = p.adjustment_speed_per_second * self.err * elapsed_seconds;
        let end_rate_at_target = adapt_rate_at_target(
            self.start_rate_at_target,
            linear_adaptation,
            p.min_rate_at_target,
            p.max_rate_at_target,
        );
        let avg_rate_at_target = average_rate_at_target(
            self.start_rate_at_target,
            linear_adaptation,
            p.min_rate_at_target,
            p.max_rate_at_target,
        );

        SimulationPoint {
            elapsed_seconds,
            end_rate_at_target: end_rate_at_target * 100.0,
            avg_rate_at_target: avg_rate_at_target * 100.0,
            end_borrow_rate: curve(end_rate_at_target, self.err, p.steepness) * 100.0,
            avg_borrow_rate: curve(avg_rate_at_target, self.err, p.steepness) * 100.0,
        }
    }

    /// Prices an ordered set of elapsed-time samples independently.
    pub fn run(&self, sample_seconds: &[f64]) -> Vec<SimulationPoint> {
        sample_seconds
            .iter()
            .map(|&elapsed| self.point_at(elapsed))
            .collect()
    }

    /// Prices the full sample set of a [`Horizon`].
    pub fn run_horizon(&self, horizon: Horizon) -> Vec<SimulationPoint> {
        self.run(&horizon.sample_seconds())
    }
}
