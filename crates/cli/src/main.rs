//! IRM CLI - project Adaptive Curve IRM borrow-rate trajectories.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_simulate, run_summary};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => {
            run_simulate(&args, cli.format)?;
        }
        Commands::Summary(args) => {
            run_summary(&args, cli.format)?;
        }
    }

    Ok(())
}
