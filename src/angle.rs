//! Angular math helpers shared by the calibration, gesture, and transform
//! modules.
//!
//! All public angle values in this crate are degrees. Deltas are always the
//! signed shortest path between two angles, normalized to the half-open
//! range (-180, 180].

use nalgebra::{Unit, UnitQuaternion, Vector3};

use crate::pose::EulerAngles;

/// Normalize an angle in degrees to the range (-180, 180]
#[must_use]
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Signed shortest-path angular difference `to - from`, in degrees
///
/// The result is normalized to (-180, 180], so going from 350° to 10°
/// yields +20°, not -340°.
#[must_use]
pub fn delta_angle(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Compose a rotation quaternion from Euler angles in degrees
///
/// Rotation order is yaw about +Y, then pitch about +X, then roll about +Z,
/// matching the head-tracking convention where +Y is up.
#[must_use]
pub fn quat_from_euler(euler: EulerAngles) -> UnitQuaternion<f64> {
    let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), euler.yaw.to_radians());
    let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), euler.pitch.to_radians());
    let roll = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), euler.roll.to_radians());
    yaw * pitch * roll
}

/// Rotation of `degrees` about an arbitrary axis
///
/// The axis is normalized internally; callers must not pass a zero-length
/// axis.
#[must_use]
pub fn quat_about_axis(axis: Vector3<f64>, degrees: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Unit::new_normalize(axis), degrees.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(180.0), 180.0);
        assert_eq!(normalize_angle(-180.0), 180.0);
        assert_eq!(normalize_angle(270.0), -90.0);
        assert_eq!(normalize_angle(-270.0), 90.0);
        assert_eq!(normalize_angle(720.0), 0.0);
    }

    #[test]
    fn test_delta_angle_shortest_path() {
        assert_eq!(delta_angle(350.0, 10.0), 20.0);
        assert_eq!(delta_angle(10.0, 350.0), -20.0);
        assert_eq!(delta_angle(0.0, 180.0), 180.0);
        assert_eq!(delta_angle(-170.0, 170.0), -20.0);
    }

    #[test]
    fn test_delta_angle_identity() {
        for angle in [-179.0, -90.0, 0.0, 45.0, 179.0] {
            assert_eq!(delta_angle(angle, angle), 0.0);
        }
    }

    #[test]
    fn test_quat_from_euler_yaw_rotates_forward() {
        let q = quat_from_euler(EulerAngles::new(0.0, 90.0, 0.0));
        let forward = q * Vector3::z();
        // 90° yaw about +Y takes +Z to +X
        assert!((forward.x - 1.0).abs() < 1e-9);
        assert!(forward.z.abs() < 1e-9);
    }

    #[test]
    fn test_quat_about_axis_matches_euler_yaw() {
        let a = quat_about_axis(Vector3::y(), 37.0);
        let b = quat_from_euler(EulerAngles::new(0.0, 37.0, 0.0));
        assert!(a.angle_to(&b) < 1e-9);
    }
}
