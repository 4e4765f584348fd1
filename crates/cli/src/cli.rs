//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use irm_rs_sim::{CurveParameters, IrmError, RateObservation, TimeUnit, SECONDS_PER_YEAR};

/// IRM CLI - simulate Adaptive Curve IRM borrow-rate trajectories
#[derive(Parser, Debug)]
#[command(name = "irm")]
#[command(about = "Simulate future borrow rates under the Adaptive Curve IRM", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project the full rate trajectory over a time horizon
    Simulate(SimulateArgs),
    /// Report the projected rates at the horizon end
    Summary(SimulateArgs),
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Current utilization in percent [0, 100], held constant over the horizon
    #[arg(long, short = 'u')]
    pub utilization: f64,

    #[command(flatten)]
    pub observation: ObservationArgs,

    /// Horizon length, in the chosen time unit
    #[arg(long, default_value = "240")]
    pub horizon: u32,

    /// Time axis unit
    #[arg(long, default_value = "hours")]
    pub unit: UnitArg,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// The observed rate anchoring the simulation (exactly one required).
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ObservationArgs {
    /// Currently observed borrow rate (APR, percent)
    #[arg(long)]
    pub borrow_rate: Option<f64>,

    /// Currently observed rate at target utilization (APR, percent)
    #[arg(long)]
    pub rate_at_target: Option<f64>,
}

impl ObservationArgs {
    pub fn to_observation(&self) -> Option<RateObservation> {
        match (self.borrow_rate, self.rate_at_target) {
            (Some(pct), _) => Some(RateObservation::BorrowRate(pct)),
            (None, Some(pct)) => Some(RateObservation::RateAtTarget(pct)),
            // clap enforces the required group before we get here
            (None, None) => None,
        }
    }
}

/// Model parameter overrides; defaults match the deployed constants.
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Target utilization (percent)
    #[arg(long, default_value = "90.0")]
    pub target_utilization: f64,

    /// Curve steepness (must exceed 1)
    #[arg(long, default_value = "4.0")]
    pub steepness: f64,

    /// Adjustment speed of the rate at target, per year
    #[arg(long, default_value = "50.0")]
    pub adjustment_speed: f64,

    /// Minimum rate at target (APR, percent)
    #[arg(long, default_value = "1.0")]
    pub min_rate: f64,

    /// Maximum rate at target (APR, percent)
    #[arg(long, default_value = "100000.0")]
    pub max_rate: f64,
}

impl ModelArgs {
    /// Validates the overrides into an immutable parameter set.
    pub fn to_parameters(&self) -> Result<CurveParameters, IrmError> {
        CurveParameters::new(
            self.steepness,
            self.adjustment_speed / SECONDS_PER_YEAR,
            self.min_rate / 100.0,
            self.max_rate / 100.0,
            self.target_utilization / 100.0,
        )
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum UnitArg {
    Hours,
    Days,
}

impl From<UnitArg> for TimeUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Hours => TimeUnit::Hours,
            UnitArg::Days => TimeUnit::Days,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
