//! Target transform integration.
//!
//! The mapper owns the yaw/pitch/scale accumulators that persist across
//! ticks. The dominant axis contributes a fixed-rate step each tick; the
//! delta's magnitude only matters for classification, its sign sets the
//! direction of travel.

use nalgebra::{UnitQuaternion, Vector3};

use crate::angle::{quat_about_axis, quat_from_euler};
use crate::constants::{EPSILON, PITCH_CLAMP};
use crate::gesture::GestureAxis;
use crate::pose::{EulerAngles, TargetPose};

/// Integrates dominant-axis gestures into a persistent target transform
#[derive(Debug, Clone)]
pub struct TransformMapper {
    rotation_speed: f64,
    zoom_speed: f64,
    min_scale: f64,
    max_scale: f64,

    accumulated_yaw: f64,
    accumulated_pitch: f64,
    scale: f64,
}

impl TransformMapper {
    /// Create a mapper
    ///
    /// `rotation_speed` is in degrees per second, `zoom_speed` in scale
    /// units per second, and the scale accumulator is clamped to
    /// [`min_scale`, `max_scale`].
    #[must_use]
    pub fn new(rotation_speed: f64, zoom_speed: f64, min_scale: f64, max_scale: f64) -> Self {
        Self {
            rotation_speed,
            zoom_speed,
            min_scale,
            max_scale,
            accumulated_yaw: 0.0,
            accumulated_pitch: 0.0,
            scale: 1.0,
        }
    }

    /// Integrate one tick of the dominant axis and compose the new
    /// target pose
    ///
    /// With a ground reference, yaw is applied about the ground-up axis in
    /// world space and pitch about the yaw-rotated right axis, so a tilted
    /// reference surface does not corrupt the yaw axis. Without one, the
    /// orientation is a plain (pitch, yaw, 0) Euler composition.
    pub fn apply(&mut self, axis: GestureAxis, signed_delta: f64, dt: f64, ground_up: Option<&Vector3<f64>>) -> TargetPose {
        let direction = signed_delta.signum();
        match axis {
            GestureAxis::Yaw => {
                self.accumulated_yaw += direction * self.rotation_speed * dt;
            }
            GestureAxis::Pitch => {
                self.accumulated_pitch -= direction * self.rotation_speed * dt;
                self.accumulated_pitch = self.accumulated_pitch.clamp(-PITCH_CLAMP, PITCH_CLAMP);
            }
            GestureAxis::Roll => {
                self.scale += direction * self.zoom_speed * dt;
                self.scale = self.scale.clamp(self.min_scale, self.max_scale);
            }
            GestureAxis::None => {}
        }

        TargetPose {
            orientation: self.compose(ground_up),
            scale: self.scale,
        }
    }

    fn compose(&self, ground_up: Option<&Vector3<f64>>) -> UnitQuaternion<f64> {
        match ground_up {
            Some(up) if up.norm() > EPSILON => {
                let yaw_rotation = quat_about_axis(*up, self.accumulated_yaw);
                let right = up.cross(&Vector3::z());
                // Ground-up parallel to the fixed forward leaves no usable
                // right axis; fall back to the world X axis
                let right = if right.norm() > EPSILON { right } else { Vector3::x() };
                let pitch_rotation = quat_about_axis(yaw_rotation * right, self.accumulated_pitch);
                pitch_rotation * yaw_rotation
            }
            _ => quat_from_euler(EulerAngles::new(self.accumulated_pitch, self.accumulated_yaw, 0.0)),
        }
    }

    /// Current yaw accumulator in degrees
    #[must_use]
    pub fn accumulated_yaw(&self) -> f64 {
        self.accumulated_yaw
    }

    /// Current pitch accumulator in degrees
    #[must_use]
    pub fn accumulated_pitch(&self) -> f64 {
        self.accumulated_pitch
    }

    /// Current target scale
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Zero all accumulators and restore unit scale
    pub fn reset_accumulators(&mut self) {
        self.accumulated_yaw = 0.0;
        self.accumulated_pitch = 0.0;
        self.scale = 1.0;
    }
}
