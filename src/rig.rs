//! Camera rig: turns the shared head signal into a stable camera pose.
//!
//! Runs once per render frame, independent of the extractor's cadence.
//! The rig owns the only other piece of persistent pipeline state besides
//! the signal cell: the smoothed camera position, which lags the raw
//! target through frame-rate-independent exponential interpolation so
//! the camera neither jitters at high frame rates nor overshoots at low
//! ones.

use crate::{config::RigConfig, signal::HeadSignal};
use glam::Vec3;

/// Target camera transform for one render frame.
///
/// Recomputed fresh every frame; the orientation is expressed as the
/// fixed focal point to re-aim at, since the position moves continuously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space camera position
    pub position: Vec3,
    /// Point the camera looks at (the room's focal point)
    pub look_at: Vec3,
}

/// Render boundary: the one mutation point the rig exposes per frame.
///
/// The renderer owns the scene graph and lighting; the rig only ever
/// sets the camera transform through this trait.
pub trait CameraSink {
    /// Commit the camera position and orientation for this frame
    fn set_camera(&mut self, pose: &CameraPose);
}

/// Rig animation mode.
///
/// `Idle` means no face has ever been detected this session; the rig
/// overlays a slow drift so the scene does not read as frozen. The mode
/// latches to `Tracking` on the first detection and never returns to
/// `Idle`, so a head legitimately centered at the origin is not mistaken
/// for an absent user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigMode {
    /// No detection has occurred yet
    Idle,
    /// At least one face has been detected
    Tracking,
}

/// Camera rig with persisted smoothed position.
pub struct CameraRig {
    config: RigConfig,
    smoothed: Vec3,
    mode: RigMode,
}

impl CameraRig {
    /// Create a rig resting at the default camera distance
    #[must_use]
    pub fn new(config: RigConfig) -> Self {
        Self {
            config,
            smoothed: Vec3::new(0.0, config.vertical_offset, config.default_distance),
            mode: RigMode::Idle,
        }
    }

    /// Current animation mode
    #[must_use]
    pub const fn mode(&self) -> RigMode {
        self.mode
    }

    /// Latch the rig into tracking mode (first detection seen)
    pub fn note_detection(&mut self) {
        self.mode = RigMode::Tracking;
    }

    /// Raw (unsmoothed) target position for a signal sample.
    ///
    /// The distance clamp applies regardless of mode: it is the hard
    /// floor and ceiling keeping the camera out of the room geometry and
    /// inside legible range, even for out-of-contract proximity values.
    #[must_use]
    pub fn target_position(&self, signal: HeadSignal, depth_tracking: bool) -> Vec3 {
        let target_x = signal.x * self.config.range_x;
        let target_y = signal.y * self.config.range_y + self.config.vertical_offset;

        let target_z = if depth_tracking {
            self.config.base_distance + signal.z * self.config.depth_scale
        } else {
            self.config.default_distance
        };
        let target_z = target_z.clamp(self.config.min_distance, self.config.max_distance);

        Vec3::new(target_x, target_y, target_z)
    }

    /// Advance the smoothed position and produce this frame's pose.
    ///
    /// `delta` is the time since the previous render frame in seconds;
    /// `elapsed` is total wall-clock time since startup, used only for
    /// the idle drift phase. The interpolation factor `1 - e^(-rate·dt)`
    /// makes convergence speed independent of frame rate and can never
    /// overshoot the target.
    pub fn update(&mut self, signal: HeadSignal, delta: f32, elapsed: f32, depth_tracking: bool) -> CameraPose {
        let target = self.target_position(signal, depth_tracking);

        let alpha = 1.0 - (-self.config.smoothing_rate * delta.max(0.0)).exp();
        self.smoothed = self.smoothed.lerp(target, alpha);

        let mut position = self.smoothed;
        if self.mode == RigMode::Idle && !depth_tracking {
            position.x += (elapsed * self.config.idle_frequency).sin() * self.config.idle_amplitude;
        }

        CameraPose {
            position,
            look_at: Vec3::ZERO,
        }
    }

    /// Current smoothed position (before any idle drift overlay)
    #[must_use]
    pub const fn smoothed_position(&self) -> Vec3 {
        self.smoothed
    }
}
