//! Cooperative per-frame driver wiring the extractor, rig, and renderer.
//!
//! One [`step`](TrackingPipeline::step) per display frame: the extractor
//! tick runs first, then the rig update, then the sink commit. Both
//! halves execute strictly interleaved on the calling thread, so the
//! shared signal cell needs no locking (see [`crate::signal`]).
//!
//! Tracking failures are terminal to the feature but never to the frame
//! loop: a pipeline whose tracker failed keeps committing the resting
//! camera pose, which is the intended degraded behavior.

use crate::{
    config::{Config, TrackerConfig},
    extractor::SignalExtractor,
    landmarks::{FrameSource, LandmarkDetector},
    rig::{CameraPose, CameraRig, CameraSink},
    signal::{SignalCell, StatusCell, TrackerStatus},
};
use log::{debug, info, warn};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Head-tracked camera pipeline.
pub struct TrackingPipeline {
    rig: CameraRig,
    extractor: Option<SignalExtractor>,
    signal: SignalCell,
    status: StatusCell,
    depth_tracking: bool,
    target_fps: u32,
    tracker_config: TrackerConfig,
    epoch_ms: u64,
}

impl TrackingPipeline {
    /// Create a pipeline with no tracker attached.
    ///
    /// Until a tracker is attached (or after one fails), every step
    /// commits the resting pose derived from the origin signal.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let epoch_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(0));

        Self {
            rig: CameraRig::new(config.rig),
            extractor: None,
            signal: SignalCell::new(),
            status: StatusCell::new(),
            depth_tracking: config.pipeline.depth_tracking,
            target_fps: config.pipeline.target_fps,
            tracker_config: config.tracker,
            epoch_ms,
        }
    }

    /// Attach an initialized detector and live frame source.
    ///
    /// The two resources are owned by the extractor from here on and are
    /// released together when the pipeline shuts down.
    pub fn attach_tracker(&mut self, detector: Box<dyn LandmarkDetector>, source: Box<dyn FrameSource>) {
        info!("Attaching head tracker");
        self.extractor = Some(SignalExtractor::new(
            detector,
            source,
            self.signal.clone(),
            self.status.clone(),
            self.tracker_config.clone(),
        ));
    }

    /// Record a tracker initialization failure.
    ///
    /// Terminal for the session: the error is surfaced through the status
    /// record and the pipeline runs untracked. No retry is attempted.
    pub fn fail_tracker(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("Tracker unavailable: {message}");
        self.status.fail(message);
    }

    /// Advance the pipeline by one display frame.
    ///
    /// `elapsed` is wall-clock time since pipeline start; `delta` is the
    /// time since the previous step. Returns the pose committed to the
    /// sink, which tests use to observe the camera directly.
    pub fn step(&mut self, elapsed: Duration, delta: Duration, sink: &mut dyn CameraSink) -> CameraPose {
        let mut tracker_failed = false;
        if let Some(extractor) = &mut self.extractor {
            let timestamp_ms = self.epoch_ms + u64::try_from(elapsed.as_millis()).unwrap_or(0);
            match extractor.tick(timestamp_ms) {
                Ok(()) => {
                    if extractor.has_detected() {
                        self.rig.note_detection();
                    }
                }
                Err(e) => {
                    warn!("Tracking stopped: {e}");
                    self.status.fail(e.to_string());
                    tracker_failed = true;
                }
            }
        }
        if tracker_failed {
            // Detach the chain and release detector + capture together
            self.extractor = None;
        }

        let pose = self.rig.update(
            self.signal.get(),
            delta.as_secs_f32(),
            elapsed.as_secs_f32(),
            self.depth_tracking,
        );
        sink.set_camera(&pose);
        pose
    }

    /// Run the paced frame loop for a fixed duration, then shut down.
    pub fn run(&mut self, sink: &mut dyn CameraSink, duration: Duration) {
        let frame_budget = Duration::from_secs_f64(1.0 / f64::from(self.target_fps));
        info!(
            "Entering render loop: {} fps target, {:.1}s",
            self.target_fps,
            duration.as_secs_f64()
        );

        let start = Instant::now();
        let mut last_frame = start;
        let mut last_rate_log = start;
        let mut frames_since_log: u32 = 0;

        while start.elapsed() < duration {
            let frame_start = Instant::now();
            let delta = frame_start - last_frame;
            last_frame = frame_start;

            self.step(frame_start - start, delta, sink);

            frames_since_log += 1;
            if last_rate_log.elapsed() >= Duration::from_secs(1) {
                let fps = f64::from(frames_since_log) / last_rate_log.elapsed().as_secs_f64();
                debug!("Render rate: {fps:.1} fps");
                last_rate_log = Instant::now();
                frames_since_log = 0;
            }

            let frame_time = frame_start.elapsed();
            if frame_time < frame_budget {
                thread::sleep(frame_budget - frame_time);
            }
        }

        self.shutdown();
    }

    /// Detach the tracker and stop the capture stream. Idempotent.
    pub fn shutdown(&mut self) {
        if self.extractor.take().is_some() {
            info!("Pipeline shut down");
        }
    }

    /// Toggle whether head proximity modulates camera distance
    pub fn set_depth_tracking(&mut self, enabled: bool) {
        self.depth_tracking = enabled;
    }

    /// Whether depth tracking is currently enabled
    #[must_use]
    pub const fn depth_tracking(&self) -> bool {
        self.depth_tracking
    }

    /// Whether a tracker is currently attached and running
    #[must_use]
    pub const fn tracker_attached(&self) -> bool {
        self.extractor.is_some()
    }

    /// Snapshot the tracker status for UI display
    #[must_use]
    pub fn status(&self) -> TrackerStatus {
        self.status.snapshot()
    }

    /// Handle to the shared signal cell.
    ///
    /// Exposed as an opaque reference so UI code can read the latest
    /// sample without copying state through the pipeline every frame.
    #[must_use]
    pub fn signal(&self) -> SignalCell {
        self.signal.clone()
    }
}
