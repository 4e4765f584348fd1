//! Detailed output formatting for the horizon-end summary.

use colored::Colorize;
use irm_rs_sim::{Horizon, HorizonSimulator, SimulationPoint, INITIAL_RATE_AT_TARGET_APR};

fn format_rate(pct: f64) -> String {
    format!("{:.4}%", pct)
}

fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_summary_detail(
    simulator: &HorizonSimulator,
    horizon: Horizon,
    utilization_pct: f64,
    point: &SimulationPoint,
) -> String {
    let params = simulator.params();
    let mut output = String::new();

    // Header
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", "Adaptive Curve IRM Projection".bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    // Model parameters
    output.push_str(&format!("{}\n", "Model Parameters".cyan().bold()));
    output.push_str(&format!(
        "  Target Utilization:  {}\n",
        format_pct(params.target_utilization * 100.0)
    ));
    output.push_str(&format!("  Curve Steepness:     {}\n", params.steepness));
    output.push_str(&format!(
        "  Adjustment Speed:    {:.2} / year\n",
        params.adjustment_speed_per_year()
    ));
    output.push_str(&format!(
        "  Initial Rate@Target: {}\n",
        format_pct(INITIAL_RATE_AT_TARGET_APR * 100.0)
    ));
    output.push_str(&format!(
        "  Rate@Target Bounds:  {} .. {}\n\n",
        format_rate(params.min_rate_at_target * 100.0),
        format_rate(params.max_rate_at_target * 100.0)
    ));

    // Inputs
    output.push_str(&format!("{}\n", "Inputs".cyan().bold()));
    output.push_str(&format!(
        "  Utilization: {}\n",
        format_pct(utilization_pct)
    ));
    output.push_str(&format!(
        "  Horizon:     {} {}\n\n",
        horizon.length,
        horizon.unit.label()
    ));

    // Projection at the horizon end
    output.push_str(&format!("{}\n", "Summary".cyan().bold()));
    output.push_str(&format!(
        "  Normalized Error:         {:.6}\n",
        simulator.normalized_err()
    ));
    output.push_str(&format!(
        "  Start Rate@Target (APR):  {}\n",
        format_rate(simulator.start_rate_at_target_pct())
    ));
    output.push_str(&format!(
        "  End Rate@Target (APR):    {}\n",
        format_rate(point.end_rate_at_target)
    ));
    output.push_str(&format!(
        "  Avg Rate@Target (APR):    {}\n",
        format_rate(point.avg_rate_at_target)
    ));
    output.push_str(&format!(
        "  End Borrow Rate (APR):    {}\n",
        format_rate(point.end_borrow_rate)
    ));
    output.push_str(&format!(
        "  Avg Borrow Rate (APR):    {}\n",
        format_rate(point.avg_borrow_rate)
    ));

    output
}
