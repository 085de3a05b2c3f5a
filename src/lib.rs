//! Head-tracked parallax camera pipeline.
//!
//! This library converts noisy per-frame facial landmark coordinates into
//! a stable, bounded, perceptually smooth virtual camera pose, suitable
//! for driving a "window into a room" parallax effect at display refresh
//! rate. The pipeline has two halves, run strictly interleaved on one
//! thread:
//!
//! 1. The **signal extractor** consumes one landmark detection per unique
//!    video frame and publishes a normalized 3-axis head position.
//! 2. The **camera rig** reads that signal once per render frame, applies
//!    frame-rate-independent exponential smoothing, clamps the camera
//!    distance to a safety window, and commits a pose that always looks
//!    at the room's focal point.
//!
//! The landmark model, the capture device, and the renderer are external
//! collaborators consumed through the traits in [`landmarks`] and
//! [`rig`]; this crate never touches pixels or the scene graph.
//!
//! # Examples
//!
//! ```no_run
//! use head_parallax::config::Config;
//! use head_parallax::pipeline::TrackingPipeline;
//! use head_parallax::rig::{CameraPose, CameraSink};
//! use head_parallax::simulate::{SyntheticDetector, SyntheticSource};
//! use std::time::Duration;
//!
//! struct PrintSink;
//!
//! impl CameraSink for PrintSink {
//!     fn set_camera(&mut self, pose: &CameraPose) {
//!         println!("camera at {:?}, looking at {:?}", pose.position, pose.look_at);
//!     }
//! }
//!
//! let config = Config::default();
//! let mut pipeline = TrackingPipeline::new(config);
//! pipeline.attach_tracker(
//!     Box::new(SyntheticDetector::new()),
//!     Box::new(SyntheticSource::new(30)),
//! );
//!
//! let mut sink = PrintSink;
//! pipeline.run(&mut sink, Duration::from_secs(5));
//! ```
//!
//! Driving the pipeline one frame at a time, as a render loop would:
//!
//! ```
//! use head_parallax::config::Config;
//! use head_parallax::rig::CameraRig;
//! use head_parallax::signal::HeadSignal;
//!
//! let config = Config::default();
//! let mut rig = CameraRig::new(config.rig);
//!
//! // Head half a unit to the right, depth tracking off
//! let signal = HeadSignal::new(0.5, 0.0, 0.0);
//! let pose = rig.update(signal, 1.0 / 60.0, 0.0, false);
//! assert!(pose.position.z >= 5.0 && pose.position.z <= 18.0);
//! ```

/// Configuration management
pub mod config;

/// Constants used throughout the pipeline
pub mod constants;

/// Error types and result handling
pub mod error;

/// Signal extraction from per-frame landmark detections
pub mod extractor;

/// Detector, capture, and landmark boundary types
pub mod landmarks;

/// Per-frame pipeline driver
pub mod pipeline;

/// Camera rig and render boundary
pub mod rig;

/// Shared head signal and tracker status
pub mod signal;

/// Synthetic detector and frame source for demos and tests
pub mod simulate;

pub use error::{Error, Result};
