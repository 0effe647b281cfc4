// mav_core/src/messages.rs

//! Plain data mirrors of the wire messages other components exchange with
//! this library. They carry no behavior beyond (de)serialization; turning them
//! into the nalgebra-backed entities happens in the entity constructors.

use serde::{Deserialize, Serialize};

// =========================================================================
// == Geometry Messages ==
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3Msg {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Quaternion in wire order `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuaternionMsg {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for QuaternionMsg {
    // Identity rather than the all-zero quaternion, which is not a rotation.
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformMsg {
    pub translation: Vector3Msg,
    pub rotation: QuaternionMsg,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TwistMsg {
    pub linear: Vector3Msg,
    pub angular: Vector3Msg,
}

/// Linear and angular acceleration. Also used for the jerk field of a joint state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelMsg {
    pub linear: Vector3Msg,
    pub angular: Vector3Msg,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WrenchMsg {
    pub force: Vector3Msg,
    pub torque: Vector3Msg,
}

/// A signed time span split into whole seconds and nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationMsg {
    pub sec: i32,
    pub nsec: i32,
}

impl DurationMsg {
    const NSEC_PER_SEC: i64 = 1_000_000_000;

    pub fn to_nsec(&self) -> i64 {
        i64::from(self.sec) * Self::NSEC_PER_SEC + i64::from(self.nsec)
    }

    /// Splits a nanosecond count so that `nsec` is always in `[0, 1e9)`.
    ///
    /// Spans beyond the `i32` seconds range saturate.
    pub fn from_nsec(nsec: i64) -> Self {
        let sec = nsec.div_euclid(Self::NSEC_PER_SEC);
        let rem = nsec.rem_euclid(Self::NSEC_PER_SEC);
        Self {
            sec: sec.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            nsec: rem as i32,
        }
    }
}

// =========================================================================
// == Trajectory Messages ==
// =========================================================================

/// The full reference for a single joint (or body) at one instant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JointState {
    pub frame_id: String,
    pub parent_id: String,
    pub transform: TransformMsg,
    pub twist: TwistMsg,
    pub acceleration: AccelMsg,
    pub jerk: AccelMsg,
    pub wrench: WrenchMsg,
    pub wrench_derivative: WrenchMsg,
}

/// References for every joint in the system at one instant of a trajectory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiJointTrajectoryPoint {
    pub states: Vec<JointState>,
    pub time_from_start: DurationMsg,
}
