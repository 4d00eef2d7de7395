//! Head-pose navigation engine for gaze-driven object manipulation.
//!
//! This library interprets a continuously sampled head pose to drive two
//! interaction behaviors on a virtual target:
//! - continuous manipulation: rotating and zooming the target by
//!   classifying which axis of head motion dominates each tick
//! - discrete selection: identifying one of the target's faces via
//!   sustained gaze alignment (or an explicit trigger) and toggling named
//!   feature flags with derived visual state
//!
//! The engine is tick-driven and deterministic: one `tick(pose, dt)` call
//! per frame, no hidden timing sources, so a recorded (pose, dt) stream
//! replays to identical outputs. Rendering, audio, and scene wiring are
//! external; the engine emits symbolic notifications for them.
//!
//! # Examples
//!
//! ## Manipulating the target
//!
//! ```
//! use head_nav::config::Config;
//! use head_nav::engine::NavEngine;
//! use head_nav::pose::{EulerAngles, Pose};
//! use nalgebra::Vector3;
//!
//! let mut engine = NavEngine::new(Config::default(), Vec::new());
//!
//! // Let the calibrator capture the neutral pose (1.0s settle by default)
//! let neutral = Pose::identity();
//! for _ in 0..11 {
//!     engine.tick(&neutral, 0.1);
//! }
//! assert!(engine.is_calibrated());
//!
//! // Turn the head 15° right: yaw dominates and the target rotates
//! let turned = Pose::new(Vector3::zeros(), EulerAngles::new(0.0, 15.0, 0.0));
//! let output = engine.tick(&turned, 0.1);
//! assert!(output.target.orientation.angle() > 0.0);
//! ```
//!
//! ## Selecting faces by dwell
//!
//! ```
//! use head_nav::config::Config;
//! use head_nav::dispatch::CapabilityTag;
//! use head_nav::engine::NavEngine;
//! use head_nav::face_alignment::FaceCandidate;
//! use head_nav::pose::Pose;
//! use nalgebra::Vector3;
//!
//! let faces = vec![FaceCandidate::new(
//!     "ButtonLight",
//!     Vector3::new(0.0, 0.0, -1.0),
//!     Vector3::new(0.0, 0.0, 2.0),
//!     CapabilityTag::Light,
//! )];
//! let mut engine = NavEngine::new(Config::default(), faces);
//!
//! // Stare straight ahead: calibration, then 4s of dwell on the face
//! let pose = Pose::identity();
//! let mut selected = None;
//! for _ in 0..60 {
//!     if let Some(event) = engine.tick(&pose, 0.1).selection {
//!         selected = Some(event);
//!     }
//! }
//! let event = selected.expect("dwell selection fires");
//! assert_eq!(event.face_id, "ButtonLight");
//! assert!(engine.flags().light_on);
//! ```

/// Angular math helpers (shortest-path deltas, quaternion composition)
pub mod angle;

/// Pose data model shared across the engine
pub mod pose;

/// Neutral pose calibration with settle-delay gating
pub mod calibration;

/// Dominant-axis gesture classification
pub mod gesture;

/// Target transform integration and rotation composition
pub mod transform;

/// Face candidates and alignment queries
pub mod face_alignment;

/// Dwell-to-select timing and selection cooldown
pub mod dwell;

/// Feature flags and derived ambient state
pub mod features;

/// Capability-tag dispatch to flag mutations and notifications
pub mod dispatch;

/// Yaw-driven 1-D indicator
pub mod indicator;

/// Per-tick engine orchestration
pub mod engine;

/// Error types and result handling
pub mod error;

/// Configuration management
pub mod config;

/// Constants used throughout the engine
pub mod constants;

pub use error::{Error, Result};
