//! Yaw-driven 1-D indicator.
//!
//! Maps incremental left-right head rotation onto a clamped horizontal
//! position, the way a head-tracked pointer follows yaw. The mapping is
//! incremental: each tick consumes the yaw change since the previous tick
//! and re-bases, so the indicator drifts with sustained rotation instead of
//! mirroring absolute head angle.

use crate::angle::delta_angle;

/// Incremental yaw-to-position mapper with travel clamping
#[derive(Debug, Clone)]
pub struct IndicatorMapper {
    sensitivity: f64,
    min_x: f64,
    max_x: f64,
    position: f64,
    last_yaw: Option<f64>,
}

impl IndicatorMapper {
    /// Create a mapper with `sensitivity` in units per degree-second and a
    /// [`min_x`, `max_x`] travel band
    #[must_use]
    pub fn new(sensitivity: f64, min_x: f64, max_x: f64) -> Self {
        Self {
            sensitivity,
            min_x,
            max_x,
            position: 0.0,
            last_yaw: None,
        }
    }

    /// Feed this tick's head yaw (degrees) and get the new position
    ///
    /// The first call establishes the yaw baseline and leaves the
    /// position unchanged.
    pub fn update(&mut self, yaw: f64, dt: f64) -> f64 {
        if let Some(last) = self.last_yaw {
            let yaw_difference = delta_angle(last, yaw);
            self.position = (self.position + yaw_difference * self.sensitivity * dt).clamp(self.min_x, self.max_x);
        }
        self.last_yaw = Some(yaw);
        self.position
    }

    /// Current indicator position
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Re-center the indicator and drop the yaw baseline
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.last_yaw = None;
    }
}
