//! Dominant-axis gesture classification.
//!
//! Each tick the head's pitch, yaw, and roll are compared against the
//! calibrated neutral pose. At most one axis may drive the target per tick:
//! an axis must exceed its activation threshold and clear every other
//! eligible axis by a separation margin. The margin adds hysteresis around
//! diagonal head tilts, where a plain largest-wins rule flickers between
//! two comparably displaced axes.

use crate::angle::delta_angle;
use crate::pose::{EulerAngles, Pose};

/// The single motion axis selected for manipulation this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAxis {
    /// No axis is eligible this tick
    None,
    /// Left-right head rotation, drives target yaw
    Yaw,
    /// Up-down head rotation, drives target pitch
    Pitch,
    /// Head tilt, drives target zoom
    Roll,
}

/// Per-axis angular displacement from the neutral pose, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDeltas {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// Classifies which axis of head motion, if any, dominates a tick
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    rotation_threshold: f64,
    zoom_threshold: f64,
    separation_margin: f64,
}

impl GestureClassifier {
    /// Create a classifier
    ///
    /// `rotation_threshold` gates yaw and pitch, `zoom_threshold` gates
    /// roll, and `separation_margin` is the lead an axis must hold over
    /// the other eligible axes, all in degrees.
    #[must_use]
    pub fn new(rotation_threshold: f64, zoom_threshold: f64, separation_margin: f64) -> Self {
        Self {
            rotation_threshold,
            zoom_threshold,
            separation_margin,
        }
    }

    /// Shortest-path deltas between the current and neutral orientation
    #[must_use]
    pub fn deltas(current: &EulerAngles, neutral: &EulerAngles) -> AxisDeltas {
        AxisDeltas {
            pitch: delta_angle(neutral.pitch, current.pitch),
            yaw: delta_angle(neutral.yaw, current.yaw),
            roll: delta_angle(neutral.roll, current.roll),
        }
    }

    /// Classify the dominant axis for this tick
    ///
    /// Returns the axis and its signed delta in degrees, or
    /// (`GestureAxis::None`, 0.0) when no axis is eligible. Axes are
    /// evaluated in Yaw, Pitch, Roll order, which resolves exact ties
    /// when the margin is configured to zero.
    #[must_use]
    pub fn classify(&self, current: &Pose, neutral: &Pose) -> (GestureAxis, f64) {
        let deltas = Self::deltas(&current.orientation, &neutral.orientation);

        let candidates = [
            (GestureAxis::Yaw, deltas.yaw, self.rotation_threshold),
            (GestureAxis::Pitch, deltas.pitch, self.rotation_threshold),
            (GestureAxis::Roll, deltas.roll, self.zoom_threshold),
        ];

        for &(axis, delta, threshold) in &candidates {
            if delta.abs() <= threshold {
                continue;
            }
            let clears_others = candidates.iter().all(|&(other, other_delta, other_threshold)| {
                other == axis
                    || other_delta.abs() <= other_threshold
                    || delta.abs() >= other_delta.abs() + self.separation_margin
            });
            if clears_others {
                return (axis, delta);
            }
        }

        (GestureAxis::None, 0.0)
    }
}
