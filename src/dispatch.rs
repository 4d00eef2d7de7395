//! Capability-tag dispatch.
//!
//! A fired selection carries its face's capability tag; the dispatcher maps
//! that tag to exactly one flag mutation plus the symbolic notifications an
//! effector layer needs to realize it. Notifications are idempotent state
//! descriptions, not deltas, so replaying one is harmless.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::features::{AmbientLight, FeatureFlags, FeatureStateStore};

/// Symbolic role of a face, determining which action a selection triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapabilityTag {
    /// Toggles the room light
    Light,
    /// Toggles the ambient music
    Sound,
    /// Toggles night mode
    Night,
    /// Toggles the TV screen
    Tv,
    /// Toggles the red ambience override
    Ambience,
    /// Toggles the instructions panel
    Instructions,
    /// A face with no bound action
    None,
}

/// Background variant for the `SetBackground` notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Day,
    Night,
}

/// Effector notification emitted by a dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Switch the room light on or off
    SetLight(bool),
    /// Start ambient music playback
    PlayMusic,
    /// Pause ambient music playback
    PauseMusic,
    /// Swap the scene background
    SetBackground(Background),
    /// Switch the TV screen on or off
    SetScreen(bool),
    /// Apply derived ambient light parameters
    SetAmbientLight(AmbientLight),
    /// Invert the instructions panel's visibility
    ToggleInstructionsPanel,
    /// The selected face has no bound action
    NoAction,
}

/// Outcome of dispatching one capability tag
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    /// Flag values after the mutation
    pub flags: FeatureFlags,
    /// Effector notifications to apply, in order
    pub notifications: Vec<Notification>,
}

/// Maps capability tags to flag mutations and effector notifications
#[derive(Debug, Clone, Default)]
pub struct ActionDispatcher {
    store: FeatureStateStore,
}

impl ActionDispatcher {
    /// Create a dispatcher with default feature state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flag values
    #[must_use]
    pub fn flags(&self) -> FeatureFlags {
        self.store.flags()
    }

    /// Current derived ambient light
    #[must_use]
    pub fn ambient_light(&self) -> AmbientLight {
        self.store.ambient_light()
    }

    /// Mirror the externally-owned instructions panel visibility
    ///
    /// The panel flag is the one flag this engine does not own; the
    /// session controller reports its actual state here.
    pub fn set_instructions_visible(&mut self, visible: bool) {
        self.store.set_instructions_visible(visible);
    }

    /// Execute the action bound to `tag`
    ///
    /// Every tag flips exactly one flag except `None`, which produces a
    /// logged no-op with a `NoAction` notification.
    pub fn dispatch(&mut self, tag: CapabilityTag) -> DispatchOutcome {
        let notifications = match tag {
            CapabilityTag::Light => {
                let on = self.store.toggle_light();
                vec![Notification::SetLight(on)]
            }
            CapabilityTag::Sound => {
                if self.store.toggle_music() {
                    vec![Notification::PlayMusic]
                } else {
                    vec![Notification::PauseMusic]
                }
            }
            CapabilityTag::Night => {
                let night = self.store.toggle_night();
                let background = if night { Background::Night } else { Background::Day };
                vec![
                    Notification::SetBackground(background),
                    Notification::SetAmbientLight(self.store.ambient_light()),
                ]
            }
            CapabilityTag::Tv => {
                let on = self.store.toggle_tv();
                vec![Notification::SetScreen(on)]
            }
            CapabilityTag::Ambience => {
                self.store.toggle_red_ambience();
                vec![Notification::SetAmbientLight(self.store.ambient_light())]
            }
            CapabilityTag::Instructions => {
                let visible = !self.store.flags().instructions_visible;
                self.store.set_instructions_visible(visible);
                vec![Notification::ToggleInstructionsPanel]
            }
            CapabilityTag::None => {
                warn!("Selected face has no bound action");
                vec![Notification::NoAction]
            }
        };

        debug!("Dispatched {tag:?}: {} notification(s)", notifications.len());
        DispatchOutcome {
            flags: self.store.flags(),
            notifications,
        }
    }

    /// Read-only access to the underlying store
    #[must_use]
    pub fn store(&self) -> &FeatureStateStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::AmbientColor;

    #[test]
    fn test_light_toggle_round_trip() {
        let mut dispatcher = ActionDispatcher::new();

        let outcome = dispatcher.dispatch(CapabilityTag::Light);
        assert!(outcome.flags.light_on);
        assert_eq!(outcome.notifications, vec![Notification::SetLight(true)]);

        let outcome = dispatcher.dispatch(CapabilityTag::Light);
        assert!(!outcome.flags.light_on);
        assert_eq!(outcome.notifications, vec![Notification::SetLight(false)]);
    }

    #[test]
    fn test_sound_pauses_then_plays() {
        let mut dispatcher = ActionDispatcher::new();

        // Music starts on, so the first toggle pauses
        let outcome = dispatcher.dispatch(CapabilityTag::Sound);
        assert!(!outcome.flags.music_on);
        assert_eq!(outcome.notifications, vec![Notification::PauseMusic]);

        let outcome = dispatcher.dispatch(CapabilityTag::Sound);
        assert!(outcome.flags.music_on);
        assert_eq!(outcome.notifications, vec![Notification::PlayMusic]);
    }

    #[test]
    fn test_night_emits_background_and_ambient() {
        let mut dispatcher = ActionDispatcher::new();
        let outcome = dispatcher.dispatch(CapabilityTag::Night);
        assert!(outcome.flags.night_mode);
        assert_eq!(outcome.notifications.len(), 2);
        assert_eq!(outcome.notifications[0], Notification::SetBackground(Background::Night));
        match &outcome.notifications[1] {
            Notification::SetAmbientLight(ambient) => {
                assert_eq!(ambient.color, AmbientColor::DarkBlue);
                assert_eq!(ambient.intensity, 0.5);
            }
            other => panic!("unexpected notification {other:?}"),
        }
    }

    #[test]
    fn test_ambience_overrides_night() {
        let mut dispatcher = ActionDispatcher::new();
        dispatcher.dispatch(CapabilityTag::Night);
        let outcome = dispatcher.dispatch(CapabilityTag::Ambience);
        match &outcome.notifications[0] {
            Notification::SetAmbientLight(ambient) => {
                assert_eq!(ambient.color, AmbientColor::Red);
                assert_eq!(ambient.intensity, 1.0);
            }
            other => panic!("unexpected notification {other:?}"),
        }

        // Dropping the override restores the dimmed night sun
        let outcome = dispatcher.dispatch(CapabilityTag::Ambience);
        match &outcome.notifications[0] {
            Notification::SetAmbientLight(ambient) => {
                assert_eq!(ambient.color, AmbientColor::DarkBlue);
                assert_eq!(ambient.intensity, 0.5);
            }
            other => panic!("unexpected notification {other:?}"),
        }
    }

    #[test]
    fn test_instructions_inverts_mirror() {
        let mut dispatcher = ActionDispatcher::new();
        dispatcher.set_instructions_visible(true);
        let outcome = dispatcher.dispatch(CapabilityTag::Instructions);
        assert!(!outcome.flags.instructions_visible);
        assert_eq!(outcome.notifications, vec![Notification::ToggleInstructionsPanel]);
    }

    #[test]
    fn test_unmapped_tag_is_a_noop() {
        let mut dispatcher = ActionDispatcher::new();
        let before = dispatcher.flags();
        let outcome = dispatcher.dispatch(CapabilityTag::None);
        assert_eq!(outcome.flags, before);
        assert_eq!(outcome.notifications, vec![Notification::NoAction]);
    }

    #[test]
    fn test_tv_toggle() {
        let mut dispatcher = ActionDispatcher::new();
        let outcome = dispatcher.dispatch(CapabilityTag::Tv);
        assert!(outcome.flags.tv_on);
        assert_eq!(outcome.notifications, vec![Notification::SetScreen(true)]);
    }
}
