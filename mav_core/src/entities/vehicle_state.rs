// mav_core/src/entities/vehicle_state.rs

use super::Row;
use nalgebra::{UnitQuaternion, Vector3};
use std::fmt;

/// A single instant's kinematic snapshot of the vehicle.
///
/// Acceleration is kept in the body frame because that is what an
/// accelerometer observes. Whoever fills it decides how gravity is handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    /// Position in the World frame [m].
    pub position: Vector3<f64>,
    /// Velocity in the World frame [m/s].
    pub velocity: Vector3<f64>,
    /// Acceleration in the Body frame [m/s^2].
    pub acceleration_body: Vector3<f64>,
    /// Rotation from World to Body.
    pub orientation: UnitQuaternion<f64>,
    /// Angular velocity in the Body frame [rad/s].
    pub angular_velocity_body: Vector3<f64>,
    /// Angular acceleration in the Body frame [rad/s^2].
    pub angular_acceleration_body: Vector3<f64>,
}

impl Default for VehicleState {
    /// All members zero, orientation identity.
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration_body: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            angular_velocity_body: Vector3::zeros(),
            angular_acceleration_body: Vector3::zeros(),
        }
    }
}

impl VehicleState {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        acceleration_body: Vector3<f64>,
        orientation: UnitQuaternion<f64>,
        angular_velocity_body: Vector3<f64>,
        angular_acceleration_body: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration_body,
            orientation,
            angular_velocity_body,
            angular_acceleration_body,
        }
    }
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = &self.orientation;
        writeln!(f, "position:              {}", Row(&self.position))?;
        writeln!(f, "velocity:              {}", Row(&self.velocity))?;
        writeln!(f, "acceleration_body:     {}", Row(&self.acceleration_body))?;
        writeln!(f, "orientation (w-x-y-z): {} {} {} {} ", q.w, q.i, q.j, q.k)?;
        writeln!(f, "angular_velocity_body: {}", Row(&self.angular_velocity_body))?;
        writeln!(f, "angular_acceleration_body: {}", Row(&self.angular_acceleration_body))
    }
}
