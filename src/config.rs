//! Configuration management for the head parallax pipeline

use crate::{constants, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Signal extraction tuning
    pub tracker: TrackerConfig,

    /// Camera rig tuning
    pub rig: RigConfig,

    /// Frame pacing and mode flags
    pub pipeline: PipelineConfig,
}

/// Signal extraction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Proximity calibration scalar (numerator of the inverse-distance map)
    pub eye_distance_scale: f32,

    /// Upper clamp on the published proximity signal
    pub max_proximity: f32,
}

/// Camera rig parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RigConfig {
    /// Horizontal pan sensitivity in world units
    pub range_x: f32,

    /// Vertical pan sensitivity in world units
    pub range_y: f32,

    /// Upward bias of the resting view
    pub vertical_offset: f32,

    /// Camera distance when depth tracking is disabled
    pub default_distance: f32,

    /// Camera distance at zero proximity when depth tracking is enabled
    pub base_distance: f32,

    /// World units of camera travel per unit of proximity signal
    pub depth_scale: f32,

    /// Hard floor on camera distance
    pub min_distance: f32,

    /// Hard ceiling on camera distance
    pub max_distance: f32,

    /// Exponential smoothing rate constant, per second
    pub smoothing_rate: f32,

    /// Idle drift angular frequency, radians per second
    pub idle_frequency: f32,

    /// Idle drift amplitude in world units
    pub idle_amplitude: f32,
}

/// Frame pacing and mode flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Target render frame rate
    pub target_fps: u32,

    /// Whether proximity modulates camera distance
    pub depth_tracking: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            rig: RigConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            eye_distance_scale: constants::EYE_DISTANCE_SCALE,
            max_proximity: constants::SIGNAL_Z_MAX,
        }
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            range_x: constants::DEFAULT_RANGE_X,
            range_y: constants::DEFAULT_RANGE_Y,
            vertical_offset: constants::DEFAULT_VERTICAL_OFFSET,
            default_distance: constants::DEFAULT_CAMERA_DISTANCE,
            base_distance: constants::DEFAULT_BASE_DISTANCE,
            depth_scale: constants::DEFAULT_DEPTH_SCALE,
            min_distance: constants::DEFAULT_MIN_DISTANCE,
            max_distance: constants::DEFAULT_MAX_DISTANCE,
            smoothing_rate: constants::DEFAULT_SMOOTHING_RATE,
            idle_frequency: constants::IDLE_DRIFT_FREQUENCY,
            idle_amplitude: constants::IDLE_DRIFT_AMPLITUDE,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_fps: constants::DEFAULT_TARGET_FPS,
            depth_tracking: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first out-of-range value.
    pub fn validate(&self) -> Result<()> {
        if self.tracker.eye_distance_scale <= 0.0 {
            return Err(Error::Config(
                "Eye distance scale must be greater than 0".to_string(),
            ));
        }
        if self.tracker.max_proximity <= 0.0 {
            return Err(Error::Config("Max proximity must be greater than 0".to_string()));
        }

        if self.rig.min_distance <= 0.0 {
            return Err(Error::Config("Min distance must be greater than 0".to_string()));
        }
        if self.rig.max_distance <= self.rig.min_distance {
            return Err(Error::Config(
                "Max distance must be greater than min distance".to_string(),
            ));
        }
        if self.rig.smoothing_rate <= 0.0 {
            return Err(Error::Config("Smoothing rate must be greater than 0".to_string()));
        }
        if self.rig.idle_amplitude < 0.0 {
            return Err(Error::Config("Idle amplitude must not be negative".to_string()));
        }

        if self.pipeline.target_fps == 0 {
            return Err(Error::Config("Target FPS must be greater than 0".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Head Parallax Configuration

# Signal extraction
tracker:
  eye_distance_scale: 0.15
  max_proximity: 2.0

# Camera rig
rig:
  range_x: 8.0
  range_y: 4.0
  vertical_offset: 2.0
  default_distance: 12.0
  base_distance: 8.0
  depth_scale: 4.0
  min_distance: 5.0
  max_distance: 18.0
  smoothing_rate: 4.0
  idle_frequency: 0.3
  idle_amplitude: 0.5

# Frame pacing
pipeline:
  target_fps: 60
  depth_tracking: true
"#;
