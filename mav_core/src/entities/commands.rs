// mav_core/src/entities/commands.rs

use nalgebra::{DVector, UnitQuaternion, Vector3};

/// An attitude setpoint with a body-frame thrust vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeThrust {
    /// Rotation from world to body. Expected to stay unit-norm.
    pub attitude: UnitQuaternion<f64>,
    /// Thrust in the body frame [N].
    pub thrust: Vector3<f64>,
}

impl Default for AttitudeThrust {
    fn default() -> Self {
        Self {
            attitude: UnitQuaternion::identity(),
            thrust: Vector3::zeros(),
        }
    }
}

impl AttitudeThrust {
    pub fn new(attitude: UnitQuaternion<f64>, thrust: Vector3<f64>) -> Self {
        Self { attitude, thrust }
    }
}

/// Per-actuator commands. The three vectors are independent and may have
/// different lengths; for a given actuator layout they line up by index.
#[derive(Debug, Clone, PartialEq)]
pub struct Actuators {
    /// Actuator angles [rad].
    pub angles: DVector<f64>,
    /// Actuator rates, e.g. rotor speeds [rad/s].
    pub angular_velocities: DVector<f64>,
    /// Everything else, normalized to [-1, 1].
    pub normalized: DVector<f64>,
}

impl Default for Actuators {
    fn default() -> Self {
        Self {
            angles: DVector::zeros(0),
            angular_velocities: DVector::zeros(0),
            normalized: DVector::zeros(0),
        }
    }
}

impl Actuators {
    pub fn new(
        angles: DVector<f64>,
        angular_velocities: DVector<f64>,
        normalized: DVector<f64>,
    ) -> Self {
        Self {
            angles,
            angular_velocities,
            normalized,
        }
    }

    /// Rotor-speed-only command; angles and normalized stay empty.
    pub fn from_angular_velocities(angular_velocities: DVector<f64>) -> Self {
        Self {
            angular_velocities,
            ..Self::default()
        }
    }
}

/// Body rates with a body-frame thrust vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateThrust {
    pub angular_rates: Vector3<f64>,
    pub thrust: Vector3<f64>,
}

impl Default for RateThrust {
    fn default() -> Self {
        Self {
            angular_rates: Vector3::zeros(),
            thrust: Vector3::zeros(),
        }
    }
}

impl RateThrust {
    pub fn new(angular_rates: Vector3<f64>, thrust: Vector3<f64>) -> Self {
        Self {
            angular_rates,
            thrust,
        }
    }
}

/// Body torque with a body-frame thrust vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorqueThrust {
    pub torque: Vector3<f64>,
    pub thrust: Vector3<f64>,
}

impl Default for TorqueThrust {
    fn default() -> Self {
        Self {
            torque: Vector3::zeros(),
            thrust: Vector3::zeros(),
        }
    }
}

impl TorqueThrust {
    pub fn new(torque: Vector3<f64>, thrust: Vector3<f64>) -> Self {
        Self { torque, thrust }
    }
}

/// Reduced attitude command for cascaded low-level controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollPitchYawrateThrust {
    pub roll: f64,
    pub pitch: f64,
    pub yaw_rate: f64,
    pub thrust: Vector3<f64>,
}

impl Default for RollPitchYawrateThrust {
    fn default() -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            yaw_rate: 0.0,
            thrust: Vector3::zeros(),
        }
    }
}

impl RollPitchYawrateThrust {
    pub fn new(roll: f64, pitch: f64, yaw_rate: f64, thrust: Vector3<f64>) -> Self {
        Self {
            roll,
            pitch,
            yaw_rate,
            thrust,
        }
    }
}
