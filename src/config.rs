//! Configuration management for the head navigation engine

use crate::{constants, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Calibration configuration
    pub calibration: CalibrationConfig,

    /// Gesture classification configuration
    pub gesture: GestureConfig,

    /// Transform integration configuration
    pub transform: TransformConfig,

    /// Face selection configuration
    pub selection: SelectionConfig,

    /// Indicator configuration
    pub indicator: IndicatorConfig,
}

/// Calibration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Settle delay before the neutral pose is captured, in seconds
    pub settle_delay: f64,
}

/// Gesture classification parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Yaw/pitch activation threshold in degrees
    pub rotation_threshold: f64,

    /// Roll (zoom) activation threshold in degrees
    pub zoom_threshold: f64,

    /// Lead the dominant axis must hold over competitors, in degrees
    pub separation_margin: f64,
}

/// Transform integration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Target rotation speed in degrees per second
    pub rotation_speed: f64,

    /// Zoom speed in scale units per second
    pub zoom_speed: f64,

    /// Minimum target scale
    pub min_scale: f64,

    /// Maximum target scale
    pub max_scale: f64,
}

/// Face selection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Continuous dwell required before a gaze selection fires, in seconds
    pub gaze_duration: f64,

    /// Gaze ray reach in world units
    pub gaze_distance: f64,

    /// Face disc radius for gaze hits, in world units
    pub face_radius: f64,

    /// Same-face selection cooldown in seconds
    pub cooldown: f64,

    /// Enable the forward-lean distance-hold trigger
    pub distance_hold: bool,

    /// Forward-lean distance that arms the hold trigger, in world units
    pub lean_threshold: f64,

    /// Hold duration for the distance-hold trigger, in seconds
    pub hold_duration: f64,
}

/// Indicator parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Sensitivity in units per degree-second
    pub sensitivity: f64,

    /// Leftmost indicator position
    pub min_x: f64,

    /// Rightmost indicator position
    pub max_x: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            settle_delay: constants::DEFAULT_CALIBRATION_DELAY,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            rotation_threshold: constants::DEFAULT_ROTATION_THRESHOLD,
            zoom_threshold: constants::DEFAULT_ZOOM_THRESHOLD,
            separation_margin: constants::DEFAULT_SEPARATION_MARGIN,
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            rotation_speed: constants::DEFAULT_ROTATION_SPEED,
            zoom_speed: constants::DEFAULT_ZOOM_SPEED,
            min_scale: constants::DEFAULT_MIN_SCALE,
            max_scale: constants::DEFAULT_MAX_SCALE,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            gaze_duration: constants::DEFAULT_GAZE_DURATION,
            gaze_distance: constants::DEFAULT_GAZE_DISTANCE,
            face_radius: constants::DEFAULT_FACE_RADIUS,
            cooldown: constants::DEFAULT_FACE_COOLDOWN,
            distance_hold: false,
            lean_threshold: constants::DEFAULT_LEAN_THRESHOLD,
            hold_duration: constants::DEFAULT_HOLD_DURATION,
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sensitivity: constants::DEFAULT_INDICATOR_SENSITIVITY,
            min_x: constants::DEFAULT_INDICATOR_MIN,
            max_x: constants::DEFAULT_INDICATOR_MAX,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.calibration.settle_delay < 0.0 {
            return Err(Error::ConfigError("Settle delay must not be negative".to_string()));
        }

        if self.gesture.rotation_threshold <= 0.0 || self.gesture.zoom_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Activation thresholds must be greater than 0".to_string(),
            ));
        }
        if self.gesture.separation_margin < 0.0 {
            return Err(Error::ConfigError("Separation margin must not be negative".to_string()));
        }

        if self.transform.rotation_speed <= 0.0 || self.transform.zoom_speed <= 0.0 {
            return Err(Error::ConfigError("Speeds must be greater than 0".to_string()));
        }
        if self.transform.min_scale <= 0.0 || self.transform.min_scale >= self.transform.max_scale {
            return Err(Error::ConfigError(
                "Scale band must satisfy 0 < min_scale < max_scale".to_string(),
            ));
        }

        if self.selection.gaze_duration <= 0.0 || self.selection.hold_duration <= 0.0 {
            return Err(Error::ConfigError("Dwell durations must be greater than 0".to_string()));
        }
        if self.selection.gaze_distance <= 0.0 || self.selection.face_radius <= 0.0 {
            return Err(Error::ConfigError(
                "Gaze distance and face radius must be greater than 0".to_string(),
            ));
        }
        if self.selection.cooldown < 0.0 {
            return Err(Error::ConfigError("Cooldown must not be negative".to_string()));
        }
        if self.selection.lean_threshold <= 0.0 {
            return Err(Error::ConfigError("Lean threshold must be greater than 0".to_string()));
        }

        if self.indicator.min_x >= self.indicator.max_x {
            return Err(Error::ConfigError(
                "Indicator band must satisfy min_x < max_x".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Head Navigation Engine Configuration

# Neutral pose calibration
calibration:
  settle_delay: 1.0

# Dominant-axis gesture classification
gesture:
  rotation_threshold: 10.0
  zoom_threshold: 10.0
  separation_margin: 2.0

# Target transform integration
transform:
  rotation_speed: 90.0
  zoom_speed: 0.5
  min_scale: 0.25
  max_scale: 3.0

# Face selection
selection:
  gaze_duration: 4.0
  gaze_distance: 5.0
  face_radius: 0.5
  cooldown: 8.0
  distance_hold: false
  lean_threshold: 0.25
  hold_duration: 2.0

# Yaw indicator
indicator:
  sensitivity: 20.0
  min_x: -2.5
  max_x: 1.5
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).expect("example config must parse");
        assert!(config.validate().is_ok());
        assert_eq!(config.gesture.separation_margin, 2.0);
        assert_eq!(config.selection.gaze_duration, 4.0);
        assert_eq!(config.selection.cooldown, 8.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_yaml::from_str("gesture:\n  rotation_threshold: 15.0\n").unwrap();
        assert_eq!(config.gesture.rotation_threshold, 15.0);
        assert_eq!(config.transform.rotation_speed, 90.0);
    }

    #[test]
    fn test_invalid_scale_band_rejected() {
        let mut config = Config::default();
        config.transform.min_scale = 2.0;
        config.transform.max_scale = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_margin_rejected() {
        let mut config = Config::default();
        config.gesture.separation_margin = -1.0;
        assert!(config.validate().is_err());
    }
}
