// mav_cli/src/prelude.rs

// Re-export the entire mav_core prelude so the pure types like
// `TrajectoryPoint`, `Trajectory` and `apply_transform` are at hand.
pub use mav_core::prelude::*;

pub use crate::cli::{Cli, OutputFormat};
pub use crate::config::{load_scenario, Pose, ScenarioConfig};
pub use crate::error::CliError;
pub use crate::pipeline::{build_trajectory, render};
