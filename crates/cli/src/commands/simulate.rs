//! Trajectory simulation command.

use anyhow::Result;

use crate::cli::{OutputFormat, SimulateArgs};
use crate::output::format_points_table;

use super::build_simulation;

pub fn run_simulate(args: &SimulateArgs, format: OutputFormat) -> Result<()> {
    let (simulator, horizon) = build_simulation(args)?;
    let points = simulator.run_horizon(horizon);

    match format {
        OutputFormat::Table => {
            println!("{}", format_points_table(&points, horizon.unit));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&points)?;
            println!("{}", json);
        }
    }

    Ok(())
}
