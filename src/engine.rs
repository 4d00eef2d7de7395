//! Per-tick engine orchestration.
//!
//! `NavEngine` wires the calibrator, classifier, mapper, aligner, dwell
//! timer, cooldown gate, and dispatcher into one `tick(pose, dt)` pipeline.
//! There is no hidden timing source: the engine clock is the running sum of
//! the supplied `dt` values, so feeding the same recorded (pose, dt) stream
//! to two instances yields identical outputs.

use log::{debug, info};
use nalgebra::Vector3;

use crate::calibration::{CalibrationStatus, PoseCalibrator};
use crate::config::Config;
use crate::dispatch::{ActionDispatcher, CapabilityTag, Notification};
use crate::dwell::{CooldownGate, DwellSelector};
use crate::face_alignment::{FaceAligner, FaceCandidate};
use crate::features::{AmbientLight, FeatureFlags};
use crate::gesture::{GestureAxis, GestureClassifier};
use crate::indicator::IndicatorMapper;
use crate::pose::{Pose, TargetPose};
use crate::transform::TransformMapper;

/// How faces are selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Gaze ray plus dwell timer
    #[default]
    Gaze,
    /// External trigger selects the best-facing face
    Explicit,
}

/// A fired, cooldown-accepted selection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    /// Id of the selected face
    pub face_id: String,
    /// Role the face triggers
    pub tag: CapabilityTag,
    /// Engine clock time of the fire, in seconds
    pub timestamp: f64,
}

/// Everything a tick produced, for effectors and logging
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    /// Target transform after this tick
    pub target: TargetPose,
    /// Dominant gesture axis this tick
    pub axis: GestureAxis,
    /// Face currently aligned with the gaze, if any
    pub aligned_face: Option<String>,
    /// Selection accepted this tick, if any
    pub selection: Option<SelectionEvent>,
    /// Effector notifications from this tick's dispatch, in order
    pub notifications: Vec<Notification>,
    /// Yaw indicator position
    pub indicator_x: f64,
}

impl TickOutput {
    fn quiet(target: TargetPose, indicator_x: f64) -> Self {
        Self {
            target,
            axis: GestureAxis::None,
            aligned_face: None,
            selection: None,
            notifications: Vec::new(),
            indicator_x,
        }
    }
}

/// Head-pose navigation engine
pub struct NavEngine {
    config: Config,

    calibrator: PoseCalibrator,
    classifier: GestureClassifier,
    mapper: TransformMapper,
    aligner: FaceAligner,
    dwell: DwellSelector,
    cooldown: CooldownGate,
    dispatcher: ActionDispatcher,
    indicator: IndicatorMapper,

    mode: SelectionMode,
    ground_up: Option<Vector3<f64>>,
    visible: bool,
    clock: f64,
    target: TargetPose,

    // Distance-hold trigger state
    hold_timer: f64,
    hold_fired: bool,
}

impl NavEngine {
    /// Create an engine over a fixed face candidate set
    #[must_use]
    pub fn new(config: Config, faces: Vec<FaceCandidate>) -> Self {
        let calibrator = PoseCalibrator::new(config.calibration.settle_delay);
        let classifier = GestureClassifier::new(
            config.gesture.rotation_threshold,
            config.gesture.zoom_threshold,
            config.gesture.separation_margin,
        );
        let mapper = TransformMapper::new(
            config.transform.rotation_speed,
            config.transform.zoom_speed,
            config.transform.min_scale,
            config.transform.max_scale,
        );
        let aligner = FaceAligner::new(faces, config.selection.gaze_distance, config.selection.face_radius);
        let dwell = DwellSelector::new(config.selection.gaze_duration);
        let cooldown = CooldownGate::new(config.selection.cooldown);
        let indicator = IndicatorMapper::new(
            config.indicator.sensitivity,
            config.indicator.min_x,
            config.indicator.max_x,
        );

        Self {
            config,
            calibrator,
            classifier,
            mapper,
            aligner,
            dwell,
            cooldown,
            dispatcher: ActionDispatcher::new(),
            indicator,
            mode: SelectionMode::default(),
            ground_up: None,
            visible: true,
            clock: 0.0,
            target: TargetPose::identity(),
            hold_timer: 0.0,
            hold_fired: false,
        }
    }

    /// Supply or clear the ground reference up axis used for rotation
    /// composition
    pub fn set_ground_up(&mut self, up: Option<Vector3<f64>>) {
        self.ground_up = up;
    }

    /// Switch between gaze and explicit selection; any dwell progress is
    /// dropped
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode != mode {
            info!("Selection mode switched to {mode:?}");
            self.mode = mode;
            self.dwell.reset();
        }
    }

    /// Current selection mode
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Show the target and atomically reset the session
    ///
    /// Calibration, transform accumulators, dwell progress, and the
    /// indicator reset together; resetting them independently would pair a
    /// stale neutral pose with zeroed accumulators and produce a visible
    /// pose jump on the first tick.
    pub fn show(&mut self) {
        info!("Target shown, session state reset");
        self.visible = true;
        self.calibrator.reset();
        self.mapper.reset_accumulators();
        self.dwell.reset();
        self.indicator.reset();
        self.target = TargetPose::identity();
        self.hold_timer = 0.0;
        self.hold_fired = false;
    }

    /// Hide the target; ticks become no-ops until the next `show`
    pub fn hide(&mut self) {
        info!("Target hidden");
        self.visible = false;
    }

    /// Whether the target is currently shown
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the neutral pose has been captured
    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.calibrator.is_calibrated()
    }

    /// Engine clock in seconds (sum of all `dt` values seen)
    #[must_use]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Current flag values
    #[must_use]
    pub fn flags(&self) -> FeatureFlags {
        self.dispatcher.flags()
    }

    /// Current derived ambient light
    #[must_use]
    pub fn ambient_light(&self) -> AmbientLight {
        self.dispatcher.ambient_light()
    }

    /// Mirror the externally-owned instructions panel visibility
    pub fn set_instructions_visible(&mut self, visible: bool) {
        self.dispatcher.set_instructions_visible(visible);
    }

    /// Advance the engine by one tick
    pub fn tick(&mut self, pose: &Pose, dt: f64) -> TickOutput {
        self.clock += dt;

        if !self.visible {
            return TickOutput::quiet(self.target, self.indicator.position());
        }

        match self.calibrator.tick(pose, dt) {
            CalibrationStatus::NotReady | CalibrationStatus::JustCalibrated => {
                // Gesture and selection start on the first fully
                // calibrated tick
                return TickOutput::quiet(self.target, self.indicator.position());
            }
            CalibrationStatus::Calibrated => {}
        }
        let Some(neutral) = self.calibrator.neutral().copied() else {
            return TickOutput::quiet(self.target, self.indicator.position());
        };

        let (axis, signed_delta) = self.classifier.classify(pose, &neutral);
        self.target = self.mapper.apply(axis, signed_delta, dt, self.ground_up.as_ref());

        let indicator_x = self.indicator.update(pose.orientation.yaw, dt);

        let aligned_face = match self.mode {
            SelectionMode::Gaze => self.aligner.gaze_hit(pose).map(|f| f.id.clone()),
            SelectionMode::Explicit => None,
        };

        let mut selection = None;
        let mut notifications = Vec::new();

        if let Some(face_id) = self.dwell.tick(aligned_face.as_deref(), dt) {
            if let Some((event, dispatched)) = self.fire_selection(&face_id) {
                selection = Some(event);
                notifications = dispatched;
            }
        }

        // At most one selection per tick; the dwell path wins over the
        // distance-hold trigger
        if self.config.selection.distance_hold && selection.is_none() {
            if let Some((event, dispatched)) = self.tick_distance_hold(pose, &neutral, dt) {
                selection = Some(event);
                notifications = dispatched;
            }
        }

        TickOutput {
            target: self.target,
            axis,
            aligned_face,
            selection,
            notifications,
            indicator_x,
        }
    }

    /// Explicitly select the face best aligned with the head, bypassing
    /// the dwell timer but not the cooldown gate
    ///
    /// Only honored in [`SelectionMode::Explicit`]; in gaze mode the dwell
    /// timer is the sole selection path. Returns the accepted selection
    /// and its notifications, or `None` when nothing is selectable or the
    /// cooldown suppressed the fire.
    pub fn trigger_select(&mut self, pose: &Pose) -> Option<(SelectionEvent, Vec<Notification>)> {
        if self.mode != SelectionMode::Explicit {
            debug!("Explicit selection ignored in {:?} mode", self.mode);
            return None;
        }
        if !self.visible || !self.calibrator.is_calibrated() {
            debug!("Explicit selection ignored before calibration");
            return None;
        }
        let face_id = self.aligner.best_facing(pose)?.id.clone();
        self.fire_selection(&face_id)
    }

    fn tick_distance_hold(&mut self, pose: &Pose, neutral: &Pose, dt: f64) -> Option<(SelectionEvent, Vec<Notification>)> {
        let lean = (pose.position - neutral.position).norm();
        if lean > self.config.selection.lean_threshold {
            self.hold_timer += dt;
            if self.hold_timer >= self.config.selection.hold_duration && !self.hold_fired {
                self.hold_fired = true;
                let face_id = self.aligner.best_facing(pose)?.id.clone();
                return self.fire_selection(&face_id);
            }
        } else {
            self.hold_timer = 0.0;
            self.hold_fired = false;
        }
        None
    }

    fn fire_selection(&mut self, face_id: &str) -> Option<(SelectionEvent, Vec<Notification>)> {
        if !self.cooldown.should_fire(face_id, self.clock) {
            return None;
        }
        let tag = self.aligner.face(face_id).map_or(CapabilityTag::None, |f| f.tag);
        let outcome = self.dispatcher.dispatch(tag);
        let event = SelectionEvent {
            face_id: face_id.to_string(),
            tag,
            timestamp: self.clock,
        };
        info!("Selection fired: '{}' ({tag:?}) at t={:.2}s", event.face_id, event.timestamp);
        Some((event, outcome.notifications))
    }
}
