// mav_cli/src/lib.rs

// This prelude is for convenience for other files WITHIN the mav_cli crate.
pub mod prelude;

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

use crate::cli::Cli;
use crate::error::CliError;

/// Loads the scenario named on the command line and returns the rendered output.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let scenario = config::load_scenario(&cli.scenario)?;
    let trajectory = pipeline::build_trajectory(&scenario, !cli.no_transform)?;
    pipeline::render(&trajectory, cli.output)
}
