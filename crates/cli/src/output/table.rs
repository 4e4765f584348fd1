//! Table formatting for simulation time series.

use irm_rs_sim::{SimulationPoint, TimeUnit};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "End Rate@Target")]
    end_rate_at_target: String,
    #[tabled(rename = "Avg Rate@Target")]
    avg_rate_at_target: String,
    #[tabled(rename = "End Borrow Rate")]
    end_borrow_rate: String,
    #[tabled(rename = "Avg Borrow Rate")]
    avg_borrow_rate: String,
}

fn format_rate(pct: f64) -> String {
    format!("{:.4}%", pct)
}

fn format_time(elapsed_seconds: f64, unit: TimeUnit) -> String {
    format!("{:.0} {}", elapsed_seconds / unit.seconds(), unit.label())
}

pub fn format_points_table(points: &[SimulationPoint], unit: TimeUnit) -> String {
    if points.is_empty() {
        return "No samples requested.".to_string();
    }

    let rows: Vec<PointRow> = points
        .iter()
        .map(|p| PointRow {
            time: format_time(p.elapsed_seconds, unit),
            end_rate_at_target: format_rate(p.end_rate_at_target),
            avg_rate_at_target: format_rate(p.avg_rate_at_target),
            end_borrow_rate: format_rate(p.end_borrow_rate),
            avg_borrow_rate: format_rate(p.avg_borrow_rate),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()));

    table.to_string()
}
