//! Neutral pose calibration.
//!
//! The engine measures all head motion relative to a neutral reference pose
//! captured shortly after the session starts. Until that capture happens,
//! every downstream stage is gated off so a half-settled head position can
//! never become the reference.

use log::info;

use crate::pose::Pose;

/// Result of one calibration tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationStatus {
    /// Still inside the settle window; callers must skip gesture and
    /// selection processing this tick
    NotReady,
    /// The neutral pose was captured on this tick
    JustCalibrated,
    /// A neutral pose is available
    Calibrated,
}

/// Captures a neutral reference pose after a fixed settle delay
#[derive(Debug, Clone)]
pub struct PoseCalibrator {
    settle_delay: f64,
    settle_timer: f64,
    neutral: Option<Pose>,
}

impl PoseCalibrator {
    /// Create a calibrator with the given settle delay in seconds
    #[must_use]
    pub fn new(settle_delay: f64) -> Self {
        Self {
            settle_delay,
            settle_timer: 0.0,
            neutral: None,
        }
    }

    /// Advance the settle timer and capture the neutral pose once the
    /// delay elapses
    pub fn tick(&mut self, current: &Pose, dt: f64) -> CalibrationStatus {
        if self.neutral.is_some() {
            return CalibrationStatus::Calibrated;
        }

        self.settle_timer += dt;
        if self.settle_timer >= self.settle_delay {
            self.neutral = Some(*current);
            info!("Head pose calibrated after {:.2}s settle", self.settle_timer);
            return CalibrationStatus::JustCalibrated;
        }

        CalibrationStatus::NotReady
    }

    /// The captured neutral pose, if calibration has completed
    #[must_use]
    pub fn neutral(&self) -> Option<&Pose> {
        self.neutral.as_ref()
    }

    /// Whether a neutral pose has been captured
    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.neutral.is_some()
    }

    /// Re-arm calibration, discarding the neutral pose and zeroing the
    /// settle timer
    pub fn reset(&mut self) {
        self.settle_timer = 0.0;
        self.neutral = None;
    }
}
