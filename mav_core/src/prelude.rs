// mav_core/src/prelude.rs

// --- Orientation Algebra ---
pub use crate::common::{euler_angles_from_quaternion, quaternion_from_yaw, yaw_from_quaternion};

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::entities::{
    Actuators, AttitudeThrust, Odometry, RateThrust, RollPitchYawrateThrust, TorqueThrust,
    TrajectoryPoint, VehicleState,
};
pub use crate::trajectory::Trajectory;
pub use crate::types::DegreesOfFreedom;

// --- Frame Transforms ---
pub use crate::transform::apply_transform;

// --- External Messages ---
pub use crate::messages::{JointState, MultiJointTrajectoryPoint};

pub use crate::error::StateError;
