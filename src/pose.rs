//! Pose data model: immutable per-tick head snapshots and the target's
//! computed transform.

use nalgebra::{UnitQuaternion, Vector3};

use crate::angle::quat_from_euler;

/// Orientation as three signed angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    /// Rotation about the X axis (up-down head motion)
    pub pitch: f64,
    /// Rotation about the Y axis (left-right head motion)
    pub yaw: f64,
    /// Rotation about the Z axis (head tilt)
    pub roll: f64,
}

impl EulerAngles {
    /// Create Euler angles from pitch, yaw, and roll in degrees
    #[must_use]
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }
}

/// Immutable head pose snapshot for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Head position in world space
    pub position: Vector3<f64>,
    /// Head orientation in degrees
    pub orientation: EulerAngles,
}

impl Pose {
    /// Create a pose from a position and orientation
    #[must_use]
    pub const fn new(position: Vector3<f64>, orientation: EulerAngles) -> Self {
        Self { position, orientation }
    }

    /// Pose at the origin with no rotation
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: EulerAngles::default(),
        }
    }

    /// World-space forward vector of this pose (rotated +Z)
    #[must_use]
    pub fn forward(&self) -> Vector3<f64> {
        quat_from_euler(self.orientation) * Vector3::z()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Computed transform of the manipulated target, updated once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPose {
    /// Target orientation in world space
    pub orientation: UnitQuaternion<f64>,
    /// Uniform target scale
    pub scale: f64,
}

impl TargetPose {
    /// Unrotated target at unit scale
    #[must_use]
    pub fn identity() -> Self {
        Self {
            orientation: UnitQuaternion::identity(),
            scale: 1.0,
        }
    }
}

impl Default for TargetPose {
    fn default() -> Self {
        Self::identity()
    }
}
