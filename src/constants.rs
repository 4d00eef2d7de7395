//! Constants used throughout the engine

/// Default calibration settle delay in seconds
pub const DEFAULT_CALIBRATION_DELAY: f64 = 1.0;

/// Default yaw/pitch activation threshold in degrees
pub const DEFAULT_ROTATION_THRESHOLD: f64 = 10.0;

/// Default roll (zoom) activation threshold in degrees
pub const DEFAULT_ZOOM_THRESHOLD: f64 = 10.0;

/// Default separation margin between the dominant axis and its
/// competitors, in degrees
pub const DEFAULT_SEPARATION_MARGIN: f64 = 2.0;

/// Default target rotation speed in degrees per second
pub const DEFAULT_ROTATION_SPEED: f64 = 90.0;

/// Default zoom speed in scale units per second
pub const DEFAULT_ZOOM_SPEED: f64 = 0.5;

/// Pitch accumulator clamp in degrees, keeping the target away from the
/// gimbal poles
pub const PITCH_CLAMP: f64 = 89.0;

/// Default target scale band
pub const DEFAULT_MIN_SCALE: f64 = 0.25;
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Default dwell duration before a gaze selection fires, in seconds
pub const DEFAULT_GAZE_DURATION: f64 = 4.0;

/// Default gaze ray reach in world units
pub const DEFAULT_GAZE_DISTANCE: f64 = 5.0;

/// Default face disc radius for gaze ray hits, in world units
pub const DEFAULT_FACE_RADIUS: f64 = 0.5;

/// Default same-face selection cooldown in seconds
pub const DEFAULT_FACE_COOLDOWN: f64 = 8.0;

/// Default forward-lean distance that arms the distance-hold trigger,
/// in world units
pub const DEFAULT_LEAN_THRESHOLD: f64 = 0.25;

/// Default hold duration for the distance-hold trigger, in seconds
pub const DEFAULT_HOLD_DURATION: f64 = 2.0;

/// Default indicator sensitivity in units per degree-second
pub const DEFAULT_INDICATOR_SENSITIVITY: f64 = 20.0;

/// Default indicator travel band
pub const DEFAULT_INDICATOR_MIN: f64 = -2.5;
pub const DEFAULT_INDICATOR_MAX: f64 = 1.5;

/// Ambient light intensity when night mode dims the sun
pub const NIGHT_INTENSITY: f64 = 0.5;

/// Ambient light intensity in every other flag combination
pub const FULL_INTENSITY: f64 = 1.0;

/// Night-mode sun color (dark blue), as 8-bit RGB
pub const NIGHT_COLOR_RGB: (u8, u8, u8) = (67, 57, 196);

/// Numeric precision epsilon for geometric degeneracy checks
pub const EPSILON: f64 = 1e-10;
