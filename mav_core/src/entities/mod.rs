// mav_core/src/entities/mod.rs

//! The value types describing a vehicle's commanded, measured and
//! referenced motion. All fields are public; none of these types hold
//! anything beyond plain numeric data and frame names.

mod commands;
mod odometry;
mod trajectory_point;
mod vehicle_state;

pub use commands::{Actuators, AttitudeThrust, RateThrust, RollPitchYawrateThrust, TorqueThrust};
pub use odometry::Odometry;
pub use trajectory_point::TrajectoryPoint;
pub use vehicle_state::VehicleState;

use nalgebra::Vector3;
use std::fmt;

/// Writes a vector as space-separated components, the layout the debug
/// renderings use for every vector line.
pub(crate) struct Row<'a>(pub &'a Vector3<f64>);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0.x, self.0.y, self.0.z)
    }
}
