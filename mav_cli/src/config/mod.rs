// mav_cli/src/config/mod.rs

//! Loading of the scenario file that drives a `mav-tf` run.

pub mod serde_helpers;

use crate::error::CliError;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use log::info;
use mav_core::messages::MultiJointTrajectoryPoint;
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use serde::Deserialize;
use std::path::Path;

/// Environment variables with this prefix override scenario keys, with `__`
/// separating nested keys (e.g. `MAV_TRANSFORM__RPY="[0, 0, 3.14]"`).
pub const ENV_PREFIX: &str = "MAV_";

/// Scenario keys that may be overridden from the environment. Other `MAV_`
/// variables are ignored so they cannot trip `deny_unknown_fields`.
pub const ENV_KEYS: [&str; 4] = [
    "timestamp_ns",
    "degrees_of_freedom",
    "transform.translation",
    "transform.rpy",
];

// =========================================================================
// == Top-Level Scenario ==
// =========================================================================

/// # ScenarioConfig
/// The root of the data parsed from a scenario `.toml` file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Fail if the TOML has fields not in our struct
pub struct ScenarioConfig {
    /// Absolute time stamped onto every joint; -1 leaves it unset.
    #[serde(default = "default_timestamp_ns")]
    pub timestamp_ns: i64,

    /// Overrides the degrees of freedom of every joint (4 or 6).
    #[serde(default)]
    pub degrees_of_freedom: Option<u8>,

    /// The frame change applied to the trajectory.
    #[serde(default)]
    pub transform: Pose,

    #[serde(default)]
    pub trajectory: MultiJointTrajectoryPoint,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            timestamp_ns: default_timestamp_ns(),
            degrees_of_freedom: None,
            transform: Pose::default(),
            trajectory: MultiJointTrajectoryPoint::default(),
        }
    }
}

fn default_timestamp_ns() -> i64 {
    -1
}

// =========================================================================
// == Helper Structs for Nested Configuration ==
// =========================================================================

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Pose {
    #[serde(deserialize_with = "serde_helpers::vec3_from_array")]
    pub translation: Vector3<f64>,

    /// Roll, pitch, yaw in radians.
    #[serde(deserialize_with = "serde_helpers::quat_from_rpy")]
    pub rpy: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translation: Vector3::zeros(),
            rpy: UnitQuaternion::identity(),
        }
    }
}

impl Pose {
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.translation), self.rpy)
    }
}

// =========================================================================
// == Loading ==
// =========================================================================

/// Reads the scenario at `path`, then applies any `MAV_` environment overrides.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, CliError> {
    if !path.is_file() {
        return Err(CliError::MissingScenario(path.to_path_buf()));
    }
    info!("Loading scenario from: {}", path.display());

    let scenario = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__").only(&ENV_KEYS))
        .extract()?;
    Ok(scenario)
}

/// Parses a scenario held in memory. No environment overrides are applied.
pub fn scenario_from_str(toml: &str) -> Result<ScenarioConfig, CliError> {
    Ok(Figment::from(Toml::string(toml)).extract()?)
}
