//! Horizon-end summary command.

use anyhow::Result;

use crate::cli::{OutputFormat, SimulateArgs};
use crate::output::format_summary_detail;

use super::build_simulation;

pub fn run_summary(args: &SimulateArgs, format: OutputFormat) -> Result<()> {
    let (simulator, horizon) = build_simulation(args)?;
    let point = simulator.point_at(horizon.total_seconds());

    match format {
        OutputFormat::Table => {
            println!(
                "{}",
                format_summary_detail(&simulator, horizon, args.utilization, &point)
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "utilization": args.utilization,
                "normalized_err": simulator.normalized_err(),
                "start_rate_at_target": simulator.start_rate_at_target_pct(),
                "horizon": horizon.length,
                "unit": horizon.unit,
                "point": point,
            }))?;
            println!("{}", json);
        }
    }

    Ok(())
}
