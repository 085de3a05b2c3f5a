//! Synthetic detector and frame source for demos and reproducible runs.
//!
//! Stands in for the real landmark model and camera pair: the detector
//! scripts a deterministic head path (a slow pan with an approach and
//! retreat, plus periodic detection-miss windows), and the source emits
//! presentation timestamps quantized to a fixed camera frame rate.

use crate::{
    constants::{FACE_MESH_LANDMARKS, LEFT_EYE_CORNER, RIGHT_EYE_CORNER},
    landmarks::{DetectionResult, FaceLandmarks, FrameSource, Landmark, LandmarkDetector},
    Result,
};
use std::time::{Duration, Instant};

/// Length of the repeating scripted cycle in seconds
const SCRIPT_PERIOD: f32 = 8.0;

/// Portion of each cycle during which no face is reported
const MISS_WINDOW: f32 = 0.5;

/// Scripted landmark detector producing a deterministic head path.
pub struct SyntheticDetector {
    first_timestamp_ms: Option<u64>,
    landmarks: Vec<Landmark>,
}

impl SyntheticDetector {
    /// Create a detector at the start of its script
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_timestamp_ms: None,
            landmarks: vec![Landmark::default(); FACE_MESH_LANDMARKS],
        }
    }

    /// Eye midpoint and inter-eye distance at a point in the script
    fn head_at(t: f32) -> (f32, f32, f32) {
        // Slow horizontal sweep, gentler vertical bob, breathing distance
        let mid_x = 0.5 + 0.25 * (t * 0.9).sin();
        let mid_y = 0.5 + 0.10 * (t * 0.55).sin();
        let eye_distance = 0.095 + 0.04 * (t * 0.35).sin();
        (mid_x, mid_y, eye_distance)
    }
}

impl Default for SyntheticDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkDetector for SyntheticDetector {
    fn detect(&mut self, timestamp_ms: u64) -> Result<DetectionResult> {
        let first = *self.first_timestamp_ms.get_or_insert(timestamp_ms);
        let t = timestamp_ms.saturating_sub(first) as f32 / 1000.0;

        // Scripted miss window once per cycle exercises last-value retention
        if t % SCRIPT_PERIOD < MISS_WINDOW {
            return Ok(DetectionResult::empty());
        }

        let (mid_x, mid_y, eye_distance) = Self::head_at(t);
        let half = eye_distance / 2.0;
        self.landmarks[LEFT_EYE_CORNER] = Landmark::new(mid_x - half, mid_y, 0.0);
        self.landmarks[RIGHT_EYE_CORNER] = Landmark::new(mid_x + half, mid_y, 0.0);

        Ok(DetectionResult {
            faces: vec![FaceLandmarks::new(self.landmarks.clone())],
        })
    }
}

/// Frame source emitting presentation timestamps at a fixed frame rate.
///
/// Timestamps are quantized to the frame interval, so a caller polling
/// faster than the simulated camera sees repeated values and skips
/// detection, exactly as with a real device.
pub struct SyntheticSource {
    started: Instant,
    frame_interval: Duration,
    stopped: bool,
}

impl SyntheticSource {
    /// Create a source ticking at `fps` frames per second
    #[must_use]
    pub fn new(fps: u32) -> Self {
        Self {
            started: Instant::now(),
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            stopped: false,
        }
    }

    /// Whether [`stop`](FrameSource::stop) has been called
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl FrameSource for SyntheticSource {
    fn current_time(&mut self) -> Result<Option<Duration>> {
        if self.stopped {
            return Ok(None);
        }

        let elapsed = self.started.elapsed();
        let frames = elapsed.as_nanos() / self.frame_interval.as_nanos();
        if frames == 0 {
            // First frame not delivered yet
            return Ok(None);
        }

        Ok(Some(self.frame_interval * u32::try_from(frames).unwrap_or(u32::MAX)))
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
