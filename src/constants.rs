//! Constants used throughout the pipeline

/// Landmark index of the left eye outer corner (MediaPipe face mesh)
pub const LEFT_EYE_CORNER: usize = 33;

/// Landmark index of the right eye outer corner (MediaPipe face mesh)
pub const RIGHT_EYE_CORNER: usize = 263;

/// Number of landmarks in the MediaPipe face mesh
pub const FACE_MESH_LANDMARKS: usize = 478;

/// Proximity calibration scalar: a face at conversational distance
/// yields z near 0, a close face yields z near 2
pub const EYE_DISTANCE_SCALE: f32 = 0.15;

/// Lower bound of the published proximity signal
pub const SIGNAL_Z_MIN: f32 = 0.0;

/// Upper bound of the published proximity signal
pub const SIGNAL_Z_MAX: f32 = 2.0;

/// Eye distances below this are treated as degenerate (face on the lens)
pub const MIN_EYE_DISTANCE: f32 = 1e-6;

/// Horizontal camera sensitivity (pan range in world units)
pub const DEFAULT_RANGE_X: f32 = 8.0;

/// Vertical camera sensitivity
pub const DEFAULT_RANGE_Y: f32 = 4.0;

/// Resting-view upward bias in world units
pub const DEFAULT_VERTICAL_OFFSET: f32 = 2.0;

/// Camera distance when depth tracking is disabled
pub const DEFAULT_CAMERA_DISTANCE: f32 = 12.0;

/// Camera distance at z = 0 when depth tracking is enabled
pub const DEFAULT_BASE_DISTANCE: f32 = 8.0;

/// World units of travel per unit of proximity signal
pub const DEFAULT_DEPTH_SCALE: f32 = 4.0;

/// Hard floor on camera distance (keeps the camera out of the geometry)
pub const DEFAULT_MIN_DISTANCE: f32 = 5.0;

/// Hard ceiling on camera distance (keeps the scene legible)
pub const DEFAULT_MAX_DISTANCE: f32 = 18.0;

/// Exponential smoothing rate constant (per second)
pub const DEFAULT_SMOOTHING_RATE: f32 = 4.0;

/// Idle drift angular frequency (radians per second)
pub const IDLE_DRIFT_FREQUENCY: f32 = 0.3;

/// Idle drift amplitude in world units
pub const IDLE_DRIFT_AMPLITUDE: f32 = 0.5;

/// Default pipeline frame rate
pub const DEFAULT_TARGET_FPS: u32 = 60;
