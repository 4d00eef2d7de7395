//! Face alignment queries for discrete selection.
//!
//! Two strategies identify the face the user is attending to: a gaze ray
//! cast from the head against per-face discs, and a best-facing search
//! over all candidates. Both are pure spatial queries; dwell timing and
//! cooldowns live elsewhere.

use log::debug;
use nalgebra::Vector3;

use crate::constants::EPSILON;
use crate::dispatch::CapabilityTag;
use crate::pose::Pose;

/// One selectable face of the target, supplied read-only by the scene
#[derive(Debug, Clone, PartialEq)]
pub struct FaceCandidate {
    /// Stable identifier, unique within the candidate set
    pub id: String,
    /// Outward-facing normal of the face
    pub forward: Vector3<f64>,
    /// Face center in world space
    pub position: Vector3<f64>,
    /// Role this face triggers when selected
    pub tag: CapabilityTag,
}

impl FaceCandidate {
    /// Create a face candidate
    #[must_use]
    pub fn new(id: impl Into<String>, forward: Vector3<f64>, position: Vector3<f64>, tag: CapabilityTag) -> Self {
        Self {
            id: id.into(),
            forward,
            position,
            tag,
        }
    }

    fn has_valid_forward(&self) -> bool {
        self.forward.norm() > EPSILON
    }
}

/// Spatial queries over a session's face candidates
#[derive(Debug, Clone)]
pub struct FaceAligner {
    faces: Vec<FaceCandidate>,
    gaze_distance: f64,
    face_radius: f64,
}

impl FaceAligner {
    /// Create an aligner over a fixed candidate set
    ///
    /// `gaze_distance` bounds the gaze ray's reach and `face_radius` is
    /// the disc radius used to stand in for each face's collision surface.
    #[must_use]
    pub fn new(faces: Vec<FaceCandidate>, gaze_distance: f64, face_radius: f64) -> Self {
        Self {
            faces,
            gaze_distance,
            face_radius,
        }
    }

    /// The candidate set this aligner searches
    #[must_use]
    pub fn faces(&self) -> &[FaceCandidate] {
        &self.faces
    }

    /// Look up a candidate by id
    #[must_use]
    pub fn face(&self, id: &str) -> Option<&FaceCandidate> {
        self.faces.iter().find(|f| f.id == id)
    }

    /// Alignment-ray strategy: cast the head's forward ray and return the
    /// nearest face disc it pierces within the gaze distance
    #[must_use]
    pub fn gaze_hit(&self, head: &Pose) -> Option<&FaceCandidate> {
        let origin = head.position;
        let direction = head.forward();

        let mut best: Option<(f64, &FaceCandidate)> = None;
        for face in &self.faces {
            if !face.has_valid_forward() {
                debug!("Skipping face '{}' with degenerate forward vector", face.id);
                continue;
            }
            let normal = face.forward.normalize();
            let denom = direction.dot(&normal);
            if denom.abs() < EPSILON {
                // Ray parallel to the face plane
                continue;
            }
            let t = (face.position - origin).dot(&normal) / denom;
            if t <= 0.0 || t > self.gaze_distance {
                continue;
            }
            let hit = origin + direction * t;
            if (hit - face.position).norm() > self.face_radius {
                continue;
            }
            if best.map_or(true, |(best_t, _)| t < best_t) {
                best = Some((t, face));
            }
        }

        best.map(|(_, face)| face)
    }

    /// Best-facing strategy: the face whose outward normal best continues
    /// the head-to-face direction
    ///
    /// Uses `dot(face.forward, normalize(face.position - head.position))`;
    /// ties keep the earlier candidate. Returns `None` for an empty set or
    /// when every candidate is degenerate.
    #[must_use]
    pub fn best_facing(&self, head: &Pose) -> Option<&FaceCandidate> {
        let mut best: Option<(f64, &FaceCandidate)> = None;
        for face in &self.faces {
            if !face.has_valid_forward() {
                debug!("Skipping face '{}' with degenerate forward vector", face.id);
                continue;
            }
            let to_face = face.position - head.position;
            if to_face.norm() < EPSILON {
                continue;
            }
            let dot = face.forward.normalize().dot(&to_face.normalize());
            if best.map_or(true, |(best_dot, _)| dot > best_dot) {
                best = Some((dot, face));
            }
        }

        best.map(|(_, face)| face)
    }
}
