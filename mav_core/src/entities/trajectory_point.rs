// mav_core/src/entities/trajectory_point.rs

use super::Row;
use crate::common::{
    quaternion_from_msg, quaternion_from_yaw, quaternion_to_msg, vector3_from_msg, vector3_to_msg,
    yaw_from_quaternion,
};
use crate::messages::{AccelMsg, JointState, TransformMsg, TwistMsg, WrenchMsg};
use crate::types::DegreesOfFreedom;
use nalgebra::{UnitQuaternion, Vector3};
use std::fmt;

/// The motion reference for one joint (or body) at one instant.
///
/// Everything except `orientation` itself is expressed in the World frame. The
/// translational and rotational parts each carry the derivative chain up to
/// snap (4th derivative).
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPoint {
    // --- Timing ---
    /// Absolute time [ns], or -1 if unset.
    pub timestamp_ns: i64,
    /// Offset from the start of the trajectory [ns].
    pub time_from_start_ns: i64,

    // --- Frames ---
    pub frame_id: String,
    pub parent_id: String,

    // --- Translation ---
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    pub jerk: Vector3<f64>,
    pub snap: Vector3<f64>,

    // --- Rotation ---
    /// Rotation from World to Body.
    pub orientation: UnitQuaternion<f64>,
    pub angular_velocity: Vector3<f64>,
    pub angular_acceleration: Vector3<f64>,
    pub angular_jerk: Vector3<f64>,
    pub angular_snap: Vector3<f64>,

    // --- Interaction Wrench ---
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
    pub force_derivative: Vector3<f64>,
    pub torque_derivative: Vector3<f64>,

    pub degrees_of_freedom: DegreesOfFreedom,
}

impl Default for TrajectoryPoint {
    fn default() -> Self {
        Self {
            timestamp_ns: -1,
            time_from_start_ns: 0,
            frame_id: "base".to_string(),
            parent_id: "world".to_string(),
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            jerk: Vector3::zeros(),
            snap: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
            angular_acceleration: Vector3::zeros(),
            angular_jerk: Vector3::zeros(),
            angular_snap: Vector3::zeros(),
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
            force_derivative: Vector3::zeros(),
            torque_derivative: Vector3::zeros(),
            degrees_of_freedom: DegreesOfFreedom::Dof4,
        }
    }
}

impl TrajectoryPoint {
    /// Builds a point from the translational chain, orientation, the first two
    /// angular derivatives and the interaction wrench. Everything not passed
    /// in keeps its default value.
    ///
    /// Use the `with_*` methods for the shorter forms, e.g. a point without
    /// angular acceleration or wrench.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        time_from_start_ns: i64,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        acceleration: Vector3<f64>,
        jerk: Vector3<f64>,
        snap: Vector3<f64>,
        orientation: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
        angular_acceleration: Vector3<f64>,
        force: Vector3<f64>,
        torque: Vector3<f64>,
        degrees_of_freedom: DegreesOfFreedom,
    ) -> Self {
        Self {
            time_from_start_ns,
            position,
            velocity,
            acceleration,
            jerk,
            snap,
            orientation,
            angular_velocity,
            angular_acceleration,
            force,
            torque,
            degrees_of_freedom,
            ..Self::default()
        }
    }

    /// Translational part only: position and its derivatives up to snap.
    pub fn with_translation(
        mut self,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        acceleration: Vector3<f64>,
        jerk: Vector3<f64>,
        snap: Vector3<f64>,
    ) -> Self {
        self.position = position;
        self.velocity = velocity;
        self.acceleration = acceleration;
        self.jerk = jerk;
        self.snap = snap;
        self
    }

    pub fn with_rotation(
        mut self,
        orientation: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
        angular_acceleration: Vector3<f64>,
    ) -> Self {
        self.orientation = orientation;
        self.angular_velocity = angular_velocity;
        self.angular_acceleration = angular_acceleration;
        self
    }

    pub fn with_wrench(mut self, force: Vector3<f64>, torque: Vector3<f64>) -> Self {
        self.force = force;
        self.torque = torque;
        self
    }

    pub fn with_degrees_of_freedom(mut self, degrees_of_freedom: DegreesOfFreedom) -> Self {
        self.degrees_of_freedom = degrees_of_freedom;
        self
    }

    // =========================================================================
    // == Message Conversion ==
    // =========================================================================

    /// Converts a joint state message. Snap and angular snap are not carried by
    /// the message and come out zero.
    pub fn from_joint_state_message(
        msg: &JointState,
        time_from_start_ns: i64,
        timestamp_ns: i64,
    ) -> Self {
        Self {
            timestamp_ns,
            time_from_start_ns,
            frame_id: msg.frame_id.clone(),
            parent_id: msg.parent_id.clone(),

            position: vector3_from_msg(&msg.transform.translation),
            velocity: vector3_from_msg(&msg.twist.linear),
            acceleration: vector3_from_msg(&msg.acceleration.linear),
            jerk: vector3_from_msg(&msg.jerk.linear),
            snap: Vector3::zeros(),

            orientation: quaternion_from_msg(&msg.transform.rotation),
            angular_velocity: vector3_from_msg(&msg.twist.angular),
            angular_acceleration: vector3_from_msg(&msg.acceleration.angular),
            angular_jerk: vector3_from_msg(&msg.jerk.angular),
            angular_snap: Vector3::zeros(),

            force: vector3_from_msg(&msg.wrench.force),
            torque: vector3_from_msg(&msg.wrench.torque),
            force_derivative: vector3_from_msg(&msg.wrench_derivative.force),
            torque_derivative: vector3_from_msg(&msg.wrench_derivative.torque),

            degrees_of_freedom: DegreesOfFreedom::default(),
        }
    }

    /// The inverse of [`Self::from_joint_state_message`]. Snap, timing and the
    /// degrees of freedom have no slot in the message and are dropped.
    pub fn to_joint_state_message(&self) -> JointState {
        JointState {
            frame_id: self.frame_id.clone(),
            parent_id: self.parent_id.clone(),
            transform: TransformMsg {
                translation: vector3_to_msg(&self.position),
                rotation: quaternion_to_msg(&self.orientation),
            },
            twist: TwistMsg {
                linear: vector3_to_msg(&self.velocity),
                angular: vector3_to_msg(&self.angular_velocity),
            },
            acceleration: AccelMsg {
                linear: vector3_to_msg(&self.acceleration),
                angular: vector3_to_msg(&self.angular_acceleration),
            },
            jerk: AccelMsg {
                linear: vector3_to_msg(&self.jerk),
                angular: vector3_to_msg(&self.angular_jerk),
            },
            wrench: WrenchMsg {
                force: vector3_to_msg(&self.force),
                torque: vector3_to_msg(&self.torque),
            },
            wrench_derivative: WrenchMsg {
                force: vector3_to_msg(&self.force_derivative),
                torque: vector3_to_msg(&self.torque_derivative),
            },
        }
    }

    // =========================================================================
    // == Yaw Accessors ==
    // =========================================================================

    pub fn yaw(&self) -> f64 {
        yaw_from_quaternion(&self.orientation)
    }

    pub fn yaw_rate(&self) -> f64 {
        self.angular_velocity.z
    }

    pub fn yaw_acc(&self) -> f64 {
        self.angular_acceleration.z
    }

    /// Replaces the orientation with a pure yaw rotation.
    ///
    /// WARNING: roll and pitch are set to zero.
    pub fn set_from_yaw(&mut self, yaw: f64) {
        self.orientation = quaternion_from_yaw(yaw);
    }

    /// WARNING: the roll and pitch rates are set to zero.
    pub fn set_from_yaw_rate(&mut self, yaw_rate: f64) {
        self.angular_velocity = Vector3::new(0.0, 0.0, yaw_rate);
    }

    /// WARNING: the roll and pitch accelerations are set to zero.
    pub fn set_from_yaw_acc(&mut self, yaw_acc: f64) {
        self.angular_acceleration = Vector3::new(0.0, 0.0, yaw_acc);
    }
}

impl fmt::Display for TrajectoryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "position:          {}", Row(&self.position))?;
        writeln!(f, "velocity:          {}", Row(&self.velocity))?;
        writeln!(f, "acceleration:      {}", Row(&self.acceleration))?;
        writeln!(f, "jerk:              {}", Row(&self.jerk))?;
        writeln!(f, "snap:              {}", Row(&self.snap))?;
        writeln!(f, "yaw:               {}", self.yaw())?;
        writeln!(f, "yaw_rate:          {}", self.yaw_rate())?;
        writeln!(f, "yaw_acc:           {}", self.yaw_acc())
    }
}
