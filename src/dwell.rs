//! Dwell-to-select timing and selection debouncing.
//!
//! `DwellSelector` turns a stream of per-tick alignment results into
//! discrete selection events: staring at the same face for the full dwell
//! duration fires once, and breaking gaze at any point forfeits all
//! progress. `CooldownGate` then suppresses accidental re-selection of the
//! same face inside a fixed window.

use log::debug;

/// Dwell progress for the currently aligned face
#[derive(Debug, Clone, PartialEq)]
pub enum DwellState {
    /// No face is aligned
    Idle,
    /// A face has been continuously aligned for `elapsed` seconds
    Aligned {
        /// Id of the aligned face
        face: String,
        /// Continuous alignment time so far
        elapsed: f64,
    },
}

/// Per-face dwell timer with reset-on-change hysteresis
#[derive(Debug, Clone)]
pub struct DwellSelector {
    gaze_duration: f64,
    state: DwellState,
}

impl DwellSelector {
    /// Create a selector that fires after `gaze_duration` seconds of
    /// continuous alignment
    #[must_use]
    pub fn new(gaze_duration: f64) -> Self {
        Self {
            gaze_duration,
            state: DwellState::Idle,
        }
    }

    /// Current dwell state
    #[must_use]
    pub fn state(&self) -> &DwellState {
        &self.state
    }

    /// Advance the dwell timer with this tick's alignment result
    ///
    /// Returns the id of the face whose selection fired this tick, if any.
    /// After firing, the timer restarts at zero while the face stays
    /// current, so holding the gaze fires again a full duration later.
    pub fn tick(&mut self, aligned: Option<&str>, dt: f64) -> Option<String> {
        let Some(aligned_face) = aligned else {
            self.state = DwellState::Idle;
            return None;
        };

        match &mut self.state {
            DwellState::Aligned { face, elapsed } if face.as_str() == aligned_face => {
                *elapsed += dt;
                if *elapsed >= self.gaze_duration {
                    *elapsed = 0.0;
                    let fired = face.clone();
                    debug!("Dwell selection fired for face '{fired}'");
                    return Some(fired);
                }
                None
            }
            _ => {
                // New alignment, or a switch to a different face: either
                // way the timer starts from zero
                self.state = DwellState::Aligned {
                    face: aligned_face.to_string(),
                    elapsed: 0.0,
                };
                None
            }
        }
    }

    /// Drop all dwell progress and return to idle
    pub fn reset(&mut self) {
        self.state = DwellState::Idle;
    }
}

/// Debounces repeated selections of the same face
#[derive(Debug, Clone)]
pub struct CooldownGate {
    cooldown_window: f64,
    last_face: Option<String>,
    last_time: f64,
}

impl CooldownGate {
    /// Create a gate with the given cooldown window in seconds
    #[must_use]
    pub fn new(cooldown_window: f64) -> Self {
        Self {
            cooldown_window,
            last_face: None,
            last_time: f64::NEG_INFINITY,
        }
    }

    /// Decide whether a selection of `face` at time `now` may fire
    ///
    /// Suppressed only when the same face fired within the cooldown
    /// window. On an accepted fire the record is overwritten, so callers
    /// must invoke this exactly once per candidate selection.
    pub fn should_fire(&mut self, face: &str, now: f64) -> bool {
        if self.last_face.as_deref() == Some(face) && now - self.last_time < self.cooldown_window {
            debug!("Suppressed repeated selection of '{face}' inside cooldown");
            return false;
        }
        self.last_face = Some(face.to_string());
        self.last_time = now;
        true
    }

    /// Forget the last selection record
    pub fn reset(&mut self) {
        self.last_face = None;
        self.last_time = f64::NEG_INFINITY;
    }
}
