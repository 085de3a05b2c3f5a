//! Error types for the head parallax pipeline.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Landmark detector failed to load or initialize
    #[error("Detector initialization error: {0}")]
    DetectorInit(String),

    /// Camera capture device denied or unavailable
    #[error("Camera access error: {0}")]
    CameraAccess(String),

    /// Landmark detection failed at runtime
    #[error("Detection error: {0}")]
    Detection(String),

    /// Detector returned a landmark set missing a contractual index
    #[error("Invalid landmarks: {0}")]
    InvalidLandmarks(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
