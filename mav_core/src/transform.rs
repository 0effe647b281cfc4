// mav_core/src/transform.rs

//! Re-expressing a trajectory reference in another frame.

use crate::entities::TrajectoryPoint;
use nalgebra::Isometry3;

/// Applies the rigid transform `transform` to every spatial quantity of `point`.
///
/// Position is a point and gets the full transform (rotation and translation).
/// Velocity, acceleration, jerk and snap, the angular velocity and
/// acceleration and the interaction wrench with its derivatives are free
/// vectors and are only rotated. The orientation is pre-multiplied by the
/// rotation.
///
/// The wrench is rotated but not transported: no lever-arm term is added to
/// the torque for the shifted origin.
///
/// Angular jerk and angular snap, timing, frame names and degrees of freedom
/// are copied unchanged.
pub fn apply_transform(transform: &Isometry3<f64>, point: &TrajectoryPoint) -> TrajectoryPoint {
    let rotation = &transform.rotation;

    TrajectoryPoint {
        position: transform.transform_point(&point.position.into()).coords,
        velocity: rotation * point.velocity,
        acceleration: rotation * point.acceleration,
        jerk: rotation * point.jerk,
        snap: rotation * point.snap,

        orientation: rotation * point.orientation,
        angular_velocity: rotation * point.angular_velocity,
        angular_acceleration: rotation * point.angular_acceleration,

        force: rotation * point.force,
        torque: rotation * point.torque,
        force_derivative: rotation * point.force_derivative,
        torque_derivative: rotation * point.torque_derivative,

        ..point.clone()
    }
}
