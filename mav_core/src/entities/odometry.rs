// mav_core/src/entities/odometry.rs

use crate::common::{euler_angles_from_quaternion, quaternion_from_yaw, yaw_from_quaternion};
use nalgebra::{Matrix6, UnitQuaternion, Vector3};

/// A filtered estimate of the vehicle state.
///
/// Unlike [`TrajectoryPoint`](super::TrajectoryPoint), linear velocity is
/// stored in the BODY frame, matching what odometry sources report. The
/// World-frame velocity is derived through [`Odometry::velocity_world`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odometry {
    /// Time since epoch [ns]. Negative means invalid/unset.
    pub timestamp_ns: i64,
    /// Position in the World frame [m].
    pub position: Vector3<f64>,
    /// Rotation from World to Body.
    pub orientation: UnitQuaternion<f64>,
    /// Velocity expressed in the Body frame [m/s].
    pub velocity_body: Vector3<f64>,
    /// Angular velocity in the Body frame [rad/s].
    pub angular_velocity_body: Vector3<f64>,
    pub pose_covariance: Matrix6<f64>,
    pub twist_covariance: Matrix6<f64>,
}

impl Default for Odometry {
    fn default() -> Self {
        Self {
            timestamp_ns: -1,
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            velocity_body: Vector3::zeros(),
            angular_velocity_body: Vector3::zeros(),
            pose_covariance: Matrix6::zeros(),
            twist_covariance: Matrix6::zeros(),
        }
    }
}

impl Odometry {
    /// Timestamp stays unset (-1) and covariances zero.
    pub fn new(
        position: Vector3<f64>,
        orientation: UnitQuaternion<f64>,
        velocity_body: Vector3<f64>,
        angular_velocity_body: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            orientation,
            velocity_body,
            angular_velocity_body,
            ..Self::default()
        }
    }

    pub fn yaw(&self) -> f64 {
        yaw_from_quaternion(&self.orientation)
    }

    /// `(roll, pitch, yaw)`, intrinsic Z-Y-X.
    pub fn euler_angles(&self) -> Vector3<f64> {
        euler_angles_from_quaternion(&self.orientation)
    }

    pub fn yaw_rate(&self) -> f64 {
        self.angular_velocity_body.z
    }

    /// WARNING: sets roll and pitch to zero.
    pub fn set_from_yaw(&mut self, yaw: f64) {
        self.orientation = quaternion_from_yaw(yaw);
    }

    /// WARNING: sets the roll and pitch rates to zero.
    pub fn set_from_yaw_rate(&mut self, yaw_rate: f64) {
        self.angular_velocity_body = Vector3::new(0.0, 0.0, yaw_rate);
    }

    /// Body velocity rotated into the World frame.
    pub fn velocity_world(&self) -> Vector3<f64> {
        self.orientation * self.velocity_body
    }

    /// Stores a World-frame velocity, converting it into the Body frame.
    pub fn set_velocity_world(&mut self, velocity_world: &Vector3<f64>) {
        self.velocity_body = self.orientation.inverse() * velocity_world;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Quaternion;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn assert_vector3_approx_eq(v1: &Vector3<f64>, v2: &Vector3<f64>) {
        assert_abs_diff_eq!(v1.x, v2.x, epsilon = EPSILON);
        assert_abs_diff_eq!(v1.y, v2.y, epsilon = EPSILON);
        assert_abs_diff_eq!(v1.z, v2.z, epsilon = EPSILON);
    }

    #[test]
    fn test_default_timestamp_is_invalid() {
        let odom = Odometry::default();
        assert!(odom.timestamp_ns < 0);
        assert_eq!(odom.pose_covariance, Matrix6::zeros());
    }

    #[test]
    fn test_velocity_world_with_quarter_turn_yaw() {
        let odom = Odometry::new(
            Vector3::zeros(),
            quaternion_from_yaw(FRAC_PI_2),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::zeros(),
        );
        assert_vector3_approx_eq(&odom.velocity_world(), &Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_set_velocity_world_round_trip() {
        let body = Vector3::new(0.3, -1.2, 0.7);
        let mut odom = Odometry::new(
            Vector3::new(5.0, 5.0, 1.0),
            UnitQuaternion::from_euler_angles(0.2, -0.4, 2.5),
            body,
            Vector3::zeros(),
        );

        let world = odom.velocity_world();
        odom.set_velocity_world(&world);
        assert_vector3_approx_eq(&odom.velocity_body, &body);

        // The inverse rotation of the world velocity recovers the stored body velocity.
        assert_vector3_approx_eq(&(odom.orientation.inverse() * world), &body);
    }

    #[test]
    fn test_set_velocity_world_stores_body_frame() {
        let mut odom = Odometry::default();
        odom.set_from_yaw(FRAC_PI_2);
        odom.set_velocity_world(&Vector3::new(0.0, 2.0, 0.0));
        assert_vector3_approx_eq(&odom.velocity_body, &Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_yaw_accessors() {
        let mut odom = Odometry {
            orientation: UnitQuaternion::from_euler_angles(0.1, 0.2, -1.0),
            angular_velocity_body: Vector3::new(0.5, 0.5, 0.25),
            ..Default::default()
        };
        assert_abs_diff_eq!(odom.yaw(), -1.0, epsilon = EPSILON);
        assert_vector3_approx_eq(&odom.euler_angles(), &Vector3::new(0.1, 0.2, -1.0));
        assert_eq!(odom.yaw_rate(), 0.25);

        odom.set_from_yaw(odom.yaw());
        assert_vector3_approx_eq(&odom.euler_angles(), &Vector3::new(0.0, 0.0, -1.0));

        odom.set_from_yaw_rate(1.5);
        assert_eq!(odom.angular_velocity_body, Vector3::new(0.0, 0.0, 1.5));
    }

    #[test]
    fn test_orientation_is_stored_as_given() {
        // No normalization happens anywhere; a scaled quaternion stays scaled.
        let scaled = UnitQuaternion::new_unchecked(Quaternion::new(2.0, 0.0, 0.0, 0.0));
        let mut odom = Odometry::new(Vector3::zeros(), scaled, Vector3::x(), Vector3::zeros());
        odom.set_velocity_world(&Vector3::x());
        assert_eq!(odom.orientation.w, 2.0);
    }
}
