//! Boundary types and traits for the landmark detector and frame source.
//!
//! The detection model and the capture device are external collaborators;
//! this crate consumes them through the traits below and never looks at
//! pixels itself. Two landmark indices are contractually assumed stable
//! across model versions: the left and right eye outer corners.

use crate::{
    constants::{LEFT_EYE_CORNER, RIGHT_EYE_CORNER},
    error::Error,
    Result,
};
use std::time::Duration;

/// A single detected facial landmark in normalized image space.
///
/// `x` and `y` are in `[0, 1]` with the origin at the top-left of the
/// frame; `z` is the model's relative depth estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    /// Create a landmark from normalized coordinates
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another landmark in the image plane
    #[must_use]
    pub fn distance_2d(&self, other: &Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One face's landmark set as returned by the detector.
#[derive(Debug, Clone, Default)]
pub struct FaceLandmarks {
    points: Vec<Landmark>,
}

impl FaceLandmarks {
    /// Wrap a raw landmark list
    #[must_use]
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    /// Number of landmarks in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Landmark at a raw index, if present
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.points.get(index)
    }

    /// Left eye outer corner (contractual index)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLandmarks`] if the detector produced a set
    /// too short to contain the index.
    pub fn left_eye(&self) -> Result<&Landmark> {
        self.points.get(LEFT_EYE_CORNER).ok_or_else(|| {
            Error::InvalidLandmarks(format!(
                "landmark set has {} points, left eye corner needs index {LEFT_EYE_CORNER}",
                self.points.len()
            ))
        })
    }

    /// Right eye outer corner (contractual index)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLandmarks`] if the detector produced a set
    /// too short to contain the index.
    pub fn right_eye(&self) -> Result<&Landmark> {
        self.points.get(RIGHT_EYE_CORNER).ok_or_else(|| {
            Error::InvalidLandmarks(format!(
                "landmark set has {} points, right eye corner needs index {RIGHT_EYE_CORNER}",
                self.points.len()
            ))
        })
    }
}

/// Result of one detector invocation.
///
/// The detector is configured for at most one face; `faces` is empty when
/// no face was found in the frame.
#[derive(Debug, Clone, Default)]
pub struct DetectionResult {
    pub faces: Vec<FaceLandmarks>,
}

impl DetectionResult {
    /// Result carrying no faces
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The primary (single) face, if one was detected
    #[must_use]
    pub fn primary_face(&self) -> Option<&FaceLandmarks> {
        self.faces.first()
    }
}

/// Facial landmark detector boundary.
///
/// Implementations run in streaming/video mode against the live capture
/// stream they share with the [`FrameSource`]; the pipeline hands them
/// only a monotonically increasing wall-clock timestamp, the way
/// MediaPipe's `detectForVideo` is driven. Constructors that load or
/// compile the model should report failures as
/// [`Error::DetectorInit`]; those are terminal to the tracking feature.
pub trait LandmarkDetector {
    /// Run detection against the current video frame
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detection`] if inference fails. A frame with no
    /// face is not an error; it yields an empty [`DetectionResult`].
    fn detect(&mut self, timestamp_ms: u64) -> Result<DetectionResult>;
}

/// Live video frame source boundary.
///
/// Yields presentation timestamps that increase monotonically as new
/// frames arrive; the extractor compares them to skip redundant detection
/// when the render rate exceeds the camera frame rate.
pub trait FrameSource {
    /// Presentation timestamp of the currently available frame, or `None`
    /// before the first frame arrives
    ///
    /// # Errors
    ///
    /// Returns [`Error::CameraAccess`] if the capture stream has failed.
    fn current_time(&mut self) -> Result<Option<Duration>>;

    /// Stop the underlying capture tracks. Idempotent.
    fn stop(&mut self);
}
