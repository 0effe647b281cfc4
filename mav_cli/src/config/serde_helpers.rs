// mav_cli/src/config/serde_helpers.rs

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Deserializer};

pub fn vec3_from_array<'de, D>(deserializer: D) -> Result<Vector3<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let arr: [f64; 3] = Deserialize::deserialize(deserializer)?;
    Ok(Vector3::from(arr))
}

/// Orientation written as `[roll, pitch, yaw]` in radians.
pub fn quat_from_rpy<'de, D>(deserializer: D) -> Result<UnitQuaternion<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let arr: [f64; 3] = Deserialize::deserialize(deserializer)?;
    Ok(UnitQuaternion::from_euler_angles(
        arr[0], // Roll
        arr[1], // Pitch
        arr[2], // Yaw
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "vec3_from_array")]
        v: Vector3<f64>,
        #[serde(deserialize_with = "quat_from_rpy")]
        q: UnitQuaternion<f64>,
    }

    #[test]
    fn test_arrays_become_nalgebra_types() {
        let w: Wrapper = toml::from_str("v = [1.0, 2.0, 3.0]\nq = [0.1, 0.2, 0.3]").unwrap();
        assert_eq!(w.v, Vector3::new(1.0, 2.0, 3.0));

        let (roll, pitch, yaw) = w.q.euler_angles();
        assert_abs_diff_eq!(roll, 0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(pitch, 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(yaw, 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert!(toml::from_str::<Wrapper>("v = [1.0, 2.0]\nq = [0.0, 0.0, 0.0]").is_err());
    }
}
