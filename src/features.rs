//! Feature flag store and derived ambient state.
//!
//! All interactive state the faces can toggle lives here, behind read-only
//! accessors. Only the action dispatcher mutates the flags, so every
//! derived view (the ambient light in particular) is computed from one
//! consistent aggregate.

use crate::constants::{FULL_INTENSITY, NIGHT_COLOR_RGB, NIGHT_INTENSITY};

/// Named boolean state toggled by face selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Room light on/off
    pub light_on: bool,
    /// Ambient music playing
    pub music_on: bool,
    /// Night background and dimmed sun
    pub night_mode: bool,
    /// TV screen on/off
    pub tv_on: bool,
    /// Red ambient lighting override
    pub red_ambience: bool,
    /// Mirror of the externally-owned instructions panel visibility
    pub instructions_visible: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            light_on: false,
            // The session starts with ambient music already playing
            music_on: true,
            night_mode: false,
            tv_on: false,
            red_ambience: false,
            instructions_visible: false,
        }
    }
}

/// Ambient sun color, symbolic so effectors pick their own color space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientColor {
    /// The scene's original sun color
    Original,
    /// Red ambience override
    Red,
    /// Night-mode dark blue
    DarkBlue,
}

impl AmbientColor {
    /// 8-bit RGB value for colors the engine defines itself
    ///
    /// `Original` has no fixed RGB; the effector owns that color.
    #[must_use]
    pub const fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Original => None,
            Self::Red => Some((255, 0, 0)),
            Self::DarkBlue => Some(NIGHT_COLOR_RGB),
        }
    }
}

/// Derived ambient light parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    /// Sun color to apply
    pub color: AmbientColor,
    /// Sun intensity to apply
    pub intensity: f64,
}

/// Exclusive owner of the session's feature flags
#[derive(Debug, Clone, Default)]
pub struct FeatureStateStore {
    flags: FeatureFlags,
}

impl FeatureStateStore {
    /// Create a store with default flags
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flag values
    #[must_use]
    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }

    /// Ambient light derived from the night-mode and red-ambience flags
    ///
    /// Red ambience wins over night mode; night mode alone dims the sun
    /// and shifts it dark blue; otherwise the original sun is restored at
    /// full intensity.
    #[must_use]
    pub fn ambient_light(&self) -> AmbientLight {
        Self::derive_ambient(self.flags.night_mode, self.flags.red_ambience)
    }

    /// The pure ambient derivation over (night_mode, red_ambience)
    #[must_use]
    pub fn derive_ambient(night_mode: bool, red_ambience: bool) -> AmbientLight {
        match (night_mode, red_ambience) {
            (_, true) => AmbientLight {
                color: AmbientColor::Red,
                intensity: FULL_INTENSITY,
            },
            (true, false) => AmbientLight {
                color: AmbientColor::DarkBlue,
                intensity: NIGHT_INTENSITY,
            },
            (false, false) => AmbientLight {
                color: AmbientColor::Original,
                intensity: FULL_INTENSITY,
            },
        }
    }

    pub(crate) fn toggle_light(&mut self) -> bool {
        self.flags.light_on = !self.flags.light_on;
        self.flags.light_on
    }

    pub(crate) fn toggle_music(&mut self) -> bool {
        self.flags.music_on = !self.flags.music_on;
        self.flags.music_on
    }

    pub(crate) fn toggle_night(&mut self) -> bool {
        self.flags.night_mode = !self.flags.night_mode;
        self.flags.night_mode
    }

    pub(crate) fn toggle_tv(&mut self) -> bool {
        self.flags.tv_on = !self.flags.tv_on;
        self.flags.tv_on
    }

    pub(crate) fn toggle_red_ambience(&mut self) -> bool {
        self.flags.red_ambience = !self.flags.red_ambience;
        self.flags.red_ambience
    }

    /// Overwrite the instructions-panel mirror with the externally
    /// observed visibility
    pub fn set_instructions_visible(&mut self, visible: bool) {
        self.flags.instructions_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let flags = FeatureStateStore::new().flags();
        assert!(!flags.light_on);
        assert!(flags.music_on);
        assert!(!flags.night_mode);
        assert!(!flags.tv_on);
        assert!(!flags.red_ambience);
        assert!(!flags.instructions_visible);
    }

    #[test]
    fn test_ambient_derivation_table() {
        let cases = [
            (false, false, AmbientColor::Original, 1.0),
            (false, true, AmbientColor::Red, 1.0),
            (true, false, AmbientColor::DarkBlue, 0.5),
            (true, true, AmbientColor::Red, 1.0),
        ];
        for (night, red, color, intensity) in cases {
            let ambient = FeatureStateStore::derive_ambient(night, red);
            assert_eq!(ambient.color, color, "night={night} red={red}");
            assert_eq!(ambient.intensity, intensity, "night={night} red={red}");
        }
    }

    #[test]
    fn test_ambient_light_tracks_flags() {
        let mut store = FeatureStateStore::new();
        store.toggle_night();
        assert_eq!(store.ambient_light().color, AmbientColor::DarkBlue);
        assert_eq!(store.ambient_light().intensity, 0.5);

        store.toggle_red_ambience();
        assert_eq!(store.ambient_light().color, AmbientColor::Red);
        assert_eq!(store.ambient_light().intensity, 1.0);
    }

    #[test]
    fn test_toggles_flip_exactly_one_flag() {
        let mut store = FeatureStateStore::new();
        let before = store.flags();
        assert!(store.toggle_light());
        let after = store.flags();
        assert!(after.light_on);
        assert_eq!(after.music_on, before.music_on);
        assert_eq!(after.night_mode, before.night_mode);
        assert_eq!(after.tv_on, before.tv_on);
        assert_eq!(after.red_ambience, before.red_ambience);
    }

    #[test]
    fn test_night_color_rgb() {
        assert_eq!(AmbientColor::DarkBlue.rgb(), Some((67, 57, 196)));
        assert_eq!(AmbientColor::Original.rgb(), None);
    }
}
