//! Signal extraction: one detector invocation per unique video frame.
//!
//! The extractor turns noisy per-frame facial landmarks into the shared
//! [`HeadSignal`]. Frames whose presentation timestamp has not advanced
//! are skipped, so detection never runs more often than the camera
//! produces frames. A frame with no face leaves the published signal
//! untouched; retention of the last known value is deliberate and keeps
//! the camera steady through detection glitches.

use crate::{
    config::TrackerConfig,
    constants::{MIN_EYE_DISTANCE, SIGNAL_Z_MIN},
    landmarks::{FaceLandmarks, FrameSource, LandmarkDetector},
    signal::{HeadSignal, SignalCell, StatusCell},
    Result,
};
use log::{debug, info};
use std::time::Duration;

/// Derive the normalized head signal from one face's landmarks.
///
/// `x` and `y` rescale the eye midpoint from `[0, 1]` image space to
/// `[-1, 1]` and negate it: horizontally for the mirrored camera feed,
/// vertically because screen y grows downward while world y grows upward.
/// `z` is an inverse-eye-distance proximity proxy clamped to
/// `[0, max_proximity]`; a degenerate eye distance maps to full proximity
/// rather than letting a division blow up into NaN or infinity.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidLandmarks`] if the set is too short to
/// contain the contractual eye-corner indices.
pub fn derive_signal(face: &FaceLandmarks, config: &TrackerConfig) -> Result<HeadSignal> {
    let left = face.left_eye()?;
    let right = face.right_eye()?;

    let mid_x = (left.x + right.x) / 2.0;
    let mid_y = (left.y + right.y) / 2.0;

    let x = -(mid_x - 0.5) * 2.0;
    let y = -(mid_y - 0.5) * 2.0;

    let eye_distance = left.distance_2d(right);
    let z = if eye_distance <= MIN_EYE_DISTANCE {
        // Face effectively on the lens; the inverse map saturates anyway
        config.max_proximity
    } else {
        (config.eye_distance_scale / eye_distance - 1.0).clamp(SIGNAL_Z_MIN, config.max_proximity)
    };

    Ok(HeadSignal::new(x, y, z))
}

/// Per-frame signal extractor owning the detector and capture stream.
///
/// Both resources are acquired before construction and released together:
/// dropping the extractor (or calling [`detach`](Self::detach)) stops the
/// capture tracks, so no orphaned detection loop can outlive its owner.
pub struct SignalExtractor {
    detector: Box<dyn LandmarkDetector>,
    source: Box<dyn FrameSource>,
    signal: SignalCell,
    status: StatusCell,
    config: TrackerConfig,
    last_video_time: Option<Duration>,
    has_detected: bool,
    detached: bool,
}

impl SignalExtractor {
    /// Wire an extractor to an initialized detector and live frame source
    #[must_use]
    pub fn new(
        detector: Box<dyn LandmarkDetector>,
        source: Box<dyn FrameSource>,
        signal: SignalCell,
        status: StatusCell,
        config: TrackerConfig,
    ) -> Self {
        info!("Signal extractor ready");
        status.mark_ready();

        Self {
            detector,
            source,
            signal,
            status,
            config,
            last_video_time: None,
            has_detected: false,
            detached: false,
        }
    }

    /// Process one display tick.
    ///
    /// Runs detection only when the source's presentation timestamp has
    /// advanced since the last processed frame. `timestamp_ms` must
    /// increase monotonically across calls; it is forwarded to the
    /// detector's streaming interface.
    ///
    /// # Errors
    ///
    /// Propagates capture and detection failures; both are terminal to
    /// the tracking feature and the caller is expected to record them in
    /// the status cell and stop ticking.
    pub fn tick(&mut self, timestamp_ms: u64) -> Result<()> {
        if self.detached {
            return Ok(());
        }

        let Some(frame_time) = self.source.current_time()? else {
            // No frame delivered yet
            return Ok(());
        };

        if self.last_video_time == Some(frame_time) {
            // Render rate outpaced the camera; nothing new to detect
            return Ok(());
        }
        self.last_video_time = Some(frame_time);

        let result = self.detector.detect(timestamp_ms)?;

        match result.primary_face() {
            Some(face) => {
                let sample = derive_signal(face, &self.config)?;
                self.signal.publish(sample);
                self.status.set_detecting(true);
                self.has_detected = true;
                debug!(
                    "Head signal: x={:.3} y={:.3} z={:.3}",
                    sample.x, sample.y, sample.z
                );
            }
            None => {
                // Transient miss: keep the last published value
                self.status.set_detecting(false);
            }
        }

        Ok(())
    }

    /// Whether any frame has ever produced a face detection
    #[must_use]
    pub const fn has_detected(&self) -> bool {
        self.has_detected
    }

    /// Stop the capture stream and end the detection chain. Idempotent.
    pub fn detach(&mut self) {
        if !self.detached {
            info!("Detaching signal extractor, stopping capture");
            self.source.stop();
            self.detached = true;
        }
    }
}

impl Drop for SignalExtractor {
    fn drop(&mut self) {
        self.detach();
    }
}
