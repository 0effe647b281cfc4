// mav_core/src/types.rs

use crate::error::StateError;
use serde::{Deserialize, Serialize};

// --- Actuated Degrees of Freedom ---
/// Which subset of the orientation reference a consuming controller tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DegreesOfFreedom {
    /// Yaw-only attitude control; roll and pitch are left to the controller.
    #[default]
    Dof4 = 4,
    /// Full attitude control.
    Dof6 = 6,
}

impl TryFrom<u8> for DegreesOfFreedom {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Dof4),
            6 => Ok(Self::Dof6),
            other => Err(StateError::UnsupportedDegreesOfFreedom(other)),
        }
    }
}

impl From<DegreesOfFreedom> for u8 {
    fn from(dof: DegreesOfFreedom) -> Self {
        dof as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_of_freedom_from_integer() {
        assert_eq!(DegreesOfFreedom::try_from(4), Ok(DegreesOfFreedom::Dof4));
        assert_eq!(DegreesOfFreedom::try_from(6), Ok(DegreesOfFreedom::Dof6));
        assert_eq!(
            DegreesOfFreedom::try_from(5),
            Err(StateError::UnsupportedDegreesOfFreedom(5))
        );
    }

    #[test]
    fn test_degrees_of_freedom_defaults_to_yaw_only() {
        assert_eq!(DegreesOfFreedom::default(), DegreesOfFreedom::Dof4);
        assert_eq!(u8::from(DegreesOfFreedom::Dof6), 6);
    }
}
