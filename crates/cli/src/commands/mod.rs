//! Command implementations for the IRM CLI.

mod simulate;
mod summary;

pub use simulate::run_simulate;
pub use summary::run_summary;

use anyhow::{Context, Result};
use irm_rs_sim::{Horizon, HorizonSimulator};

use crate::cli::SimulateArgs;

/// Builds the validated simulator and horizon shared by both subcommands.
fn build_simulation(args: &SimulateArgs) -> Result<(HorizonSimulator, Horizon)> {
    let params = args.model.to_parameters()?;
    let observation = args
        .observation
        .to_observation()
        .context("either --borrow-rate or --rate-at-target is required")?;
    let simulator = HorizonSimulator::new(params, args.utilization, observation)?;
    let horizon = Horizon {
        length: args.horizon,
        unit: args.unit.into(),
    };
    Ok((simulator, horizon))
}
