// mav_core/src/trajectory.rs

use crate::entities::TrajectoryPoint;
use crate::messages::{DurationMsg, MultiJointTrajectoryPoint};
use log::{debug, warn};

/// References for all controlled joints (or bodies) at one instant.
///
/// A whole trajectory over time is a sequence of these, e.g. a
/// `VecDeque<Trajectory>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Absolute time [ns], or -1 if unset.
    pub timestamp_ns: i64,
    /// Offset from the start of the trajectory [ns]. Every joint is expected
    /// to carry the same value.
    pub time_from_start_ns: i64,
    /// One reference per joint, in message order.
    pub joints: Vec<TrajectoryPoint>,
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new(-1, 0)
    }
}

impl Trajectory {
    /// An empty reference at the given time.
    pub fn new(timestamp_ns: i64, time_from_start_ns: i64) -> Self {
        Self {
            timestamp_ns,
            time_from_start_ns,
            joints: Vec::new(),
        }
    }

    /// Wraps a single joint reference, inheriting its timing.
    pub fn from_point(point: TrajectoryPoint) -> Self {
        Self {
            timestamp_ns: point.timestamp_ns,
            time_from_start_ns: point.time_from_start_ns,
            joints: vec![point],
        }
    }

    /// Converts a multi-joint trajectory message. Every joint shares the
    /// message's `time_from_start` and the given `timestamp_ns`.
    ///
    /// A message without any joint states is tolerated: the result has no
    /// joints and a warning is logged.
    pub fn from_trajectory_message(msg: &MultiJointTrajectoryPoint, timestamp_ns: i64) -> Self {
        let time_from_start_ns = msg.time_from_start.to_nsec();
        let mut trajectory = Self::new(timestamp_ns, time_from_start_ns);

        if msg.states.is_empty() {
            warn!("[Trajectory] MultiJointTrajectoryPoint is empty.");
            return trajectory;
        }

        trajectory.joints = msg
            .states
            .iter()
            .map(|state| {
                TrajectoryPoint::from_joint_state_message(state, time_from_start_ns, timestamp_ns)
            })
            .collect();

        debug!(
            "[Trajectory] Converted {} joint states at t+{} ns.",
            trajectory.joints.len(),
            trajectory.time_from_start_ns
        );
        trajectory
    }

    /// Builds the message form. The trajectory's own `time_from_start_ns` is
    /// used; per-joint timing is not carried by the message.
    pub fn to_trajectory_message(&self) -> MultiJointTrajectoryPoint {
        MultiJointTrajectoryPoint {
            states: self
                .joints
                .iter()
                .map(TrajectoryPoint::to_joint_state_message)
                .collect(),
            time_from_start: DurationMsg::from_nsec(self.time_from_start_ns),
        }
    }
}

impl From<TrajectoryPoint> for Trajectory {
    fn from(point: TrajectoryPoint) -> Self {
        Self::from_point(point)
    }
}
