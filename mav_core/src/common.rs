// mav_core/src/common.rs

//! Orientation helpers shared by every entity, plus the small conversions
//! between the plain message geometry types and nalgebra.
//!
//! All Euler angles in this crate follow the intrinsic Z-Y-X sequence
//! (yaw about Z, then pitch about the new Y, then roll about the new X).

use crate::messages::{QuaternionMsg, Vector3Msg};
use nalgebra::{Quaternion, UnitQuaternion, Vector3};

// =========================================================================
// == Yaw / Euler Algebra ==
// =========================================================================

/// Extracts the heading (rotation about world Z) from an orientation.
///
/// Consistent with [`quaternion_from_yaw`]: a pure yaw rotation is recovered exactly.
pub fn yaw_from_quaternion(q: &UnitQuaternion<f64>) -> f64 {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z))
}

/// Builds the rotation of `yaw` radians about world Z, with zero roll and pitch.
pub fn quaternion_from_yaw(yaw: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), yaw)
}

/// Decomposes an orientation into `(roll, pitch, yaw)`.
///
/// Near pitch = ±90° roll and yaw become coupled; the split returned there is
/// whatever the formulas produce.
pub fn euler_angles_from_quaternion(q: &UnitQuaternion<f64>) -> Vector3<f64> {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);

    let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
    // Rounding can push the argument just past ±1.
    let pitch = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
    let yaw = yaw_from_quaternion(q);

    Vector3::new(roll, pitch, yaw)
}

// =========================================================================
// == Message <-> nalgebra Conversions ==
// =========================================================================

pub fn vector3_from_msg(msg: &Vector3Msg) -> Vector3<f64> {
    Vector3::new(msg.x, msg.y, msg.z)
}

pub fn vector3_to_msg(v: &Vector3<f64>) -> Vector3Msg {
    Vector3Msg {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

/// Wraps the message quaternion without normalizing it.
/// Callers are trusted to send unit quaternions.
pub fn quaternion_from_msg(msg: &QuaternionMsg) -> UnitQuaternion<f64> {
    // nalgebra's Quaternion::new is (w, i, j, k)
    UnitQuaternion::new_unchecked(Quaternion::new(msg.w, msg.x, msg.y, msg.z))
}

pub fn quaternion_to_msg(q: &UnitQuaternion<f64>) -> QuaternionMsg {
    QuaternionMsg {
        x: q.i,
        y: q.j,
        z: q.k,
        w: q.w,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f64 = 1e-9;

    /// Compares two angles modulo 2π.
    fn assert_angle_eq(a: f64, b: f64) {
        let diff = (a - b).rem_euclid(2.0 * PI);
        let wrapped = diff.min(2.0 * PI - diff);
        assert!(wrapped < EPSILON, "angles differ: {} vs {}", a, b);
    }

    #[test]
    fn test_yaw_round_trip_over_full_circle() {
        for i in 0..=72 {
            let yaw = -PI + (i as f64) * (2.0 * PI / 72.0);
            let q = quaternion_from_yaw(yaw);
            assert_angle_eq(yaw_from_quaternion(&q), yaw);
        }
    }

    #[test]
    fn test_yaw_beyond_pi_wraps() {
        let q = quaternion_from_yaw(3.0 * FRAC_PI_2);
        assert_abs_diff_eq!(yaw_from_quaternion(&q), -FRAC_PI_2, epsilon = EPSILON);
    }

    #[test]
    fn test_quaternion_from_yaw_has_no_roll_or_pitch() {
        let q = quaternion_from_yaw(0.7);
        assert_abs_diff_eq!(q.i, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(q.j, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(q.w, (0.35_f64).cos(), epsilon = EPSILON);
        assert_abs_diff_eq!(q.k, (0.35_f64).sin(), epsilon = EPSILON);
    }

    #[test]
    fn test_euler_angles_match_zyx_composition() {
        let (roll, pitch, yaw) = (0.1, -0.3, 2.0);
        // Intrinsic Z-Y-X: R = Rz(yaw) * Ry(pitch) * Rx(roll)
        let q = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), yaw)
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), roll);

        let euler = euler_angles_from_quaternion(&q);
        assert_abs_diff_eq!(euler.x, roll, epsilon = EPSILON);
        assert_abs_diff_eq!(euler.y, pitch, epsilon = EPSILON);
        assert_abs_diff_eq!(euler.z, yaw, epsilon = EPSILON);

        // Same yaw as the yaw-only extraction.
        assert_abs_diff_eq!(euler.z, yaw_from_quaternion(&q), epsilon = EPSILON);

        // And the same convention nalgebra uses.
        let (r, p, y) = q.euler_angles();
        assert_abs_diff_eq!(euler, Vector3::new(r, p, y), epsilon = EPSILON);
    }

    #[test]
    fn test_euler_angles_at_gimbal_lock_stay_finite() {
        let q = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2);
        let euler = euler_angles_from_quaternion(&q);
        assert!(euler.iter().all(|v| v.is_finite()));
        assert_abs_diff_eq!(euler.y, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_msg_conversions_round_trip() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        assert_eq!(vector3_from_msg(&vector3_to_msg(&v)), v);

        let q = UnitQuaternion::from_euler_angles(0.2, 0.1, FRAC_PI_4);
        let back = quaternion_from_msg(&quaternion_to_msg(&q));
        assert_abs_diff_eq!(back.angle_to(&q), 0.0, epsilon = EPSILON);
    }
}
