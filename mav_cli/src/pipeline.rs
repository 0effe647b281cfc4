// mav_cli/src/pipeline.rs

//! Turns a loaded scenario into a (possibly re-framed) trajectory and renders it.

use crate::cli::OutputFormat;
use crate::config::ScenarioConfig;
use crate::error::CliError;
use log::{debug, info};
use mav_core::prelude::{apply_transform, DegreesOfFreedom, Trajectory};
use std::fmt::Write;

/// Converts the scenario's trajectory message and, if `transform` is set,
/// re-expresses every joint through the scenario transform.
pub fn build_trajectory(
    scenario: &ScenarioConfig,
    transform: bool,
) -> Result<Trajectory, CliError> {
    let mut trajectory =
        Trajectory::from_trajectory_message(&scenario.trajectory, scenario.timestamp_ns);

    if let Some(dof) = scenario.degrees_of_freedom {
        let dof = DegreesOfFreedom::try_from(dof)?;
        for joint in &mut trajectory.joints {
            joint.degrees_of_freedom = dof;
        }
    }

    if transform {
        let iso = scenario.transform.to_isometry();
        debug!("Applying transform: {}", iso);
        trajectory.joints = trajectory
            .joints
            .iter()
            .map(|joint| apply_transform(&iso, joint))
            .collect();
    }

    info!(
        "Built trajectory with {} joint(s) at t+{} ns.",
        trajectory.joints.len(),
        trajectory.time_from_start_ns
    );
    Ok(trajectory)
}

pub fn render(trajectory: &Trajectory, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, joint) in trajectory.joints.iter().enumerate() {
                writeln!(
                    out,
                    "--- joint {} [{} -> {}] ---",
                    i, joint.parent_id, joint.frame_id
                )?;
                write!(out, "{}", joint)?;
            }
            Ok(out)
        }
        OutputFormat::Message => Ok(toml::to_string_pretty(&trajectory.to_trajectory_message())?),
    }
}
