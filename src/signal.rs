//! Shared head-position signal and tracker status.
//!
//! The extractor and the camera rig run as two callback chains on one
//! cooperative scheduler, so the signal crossing between them is a plain
//! single-writer/single-reader cell with no synchronization. The handles
//! here are `Rc`-backed and therefore `!Send`: a port to a multi-threaded
//! runtime cannot share them by accident and must substitute an
//! atomic-snapshot cell instead of a lock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Normalized 3-axis head position published by the signal extractor.
///
/// `x` and `y` are the eye-midpoint offset from screen center, rescaled to
/// roughly `[-1, 1]` and sign-flipped for the mirrored camera feed and the
/// screen-vs-world vertical axis. `z` grows with proximity to the camera
/// and is clamped to `[0, 2]` at the source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadSignal {
    /// Horizontal offset, negative left / positive right
    pub x: f32,
    /// Vertical offset, negative down / positive up
    pub y: f32,
    /// Proximity factor, 0 at conversational distance, 2 up close
    pub z: f32,
}

impl HeadSignal {
    /// Create a signal from raw components
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Shared cell holding the latest [`HeadSignal`].
///
/// Written in place by the signal extractor on every frame with a detected
/// face and read by the camera rig once per render frame. Reads and writes
/// are whole-value, so the rig always observes a consistent sample. Clone
/// the cell to hand a reading side to another component; all clones refer
/// to the same storage and no clone allocates per frame.
#[derive(Debug, Clone, Default)]
pub struct SignalCell {
    inner: Rc<Cell<HeadSignal>>,
}

impl SignalCell {
    /// Create a cell holding the origin signal `(0, 0, 0)`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the published signal with a fresh sample
    pub fn publish(&self, signal: HeadSignal) {
        self.inner.set(signal);
    }

    /// Read the latest published sample
    #[must_use]
    pub fn get(&self) -> HeadSignal {
        self.inner.get()
    }
}

/// Read-mostly tracker state surfaced to the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerStatus {
    /// Detector finished loading and the capture stream is live
    pub is_ready: bool,
    /// A face was found in the most recently processed frame
    pub is_detecting: bool,
    /// Terminal failure message, if initialization or capture failed
    pub error: Option<String>,
}

/// Shared handle to the tracker status record.
///
/// Not on the control-critical path; the UI polls it for display.
#[derive(Debug, Clone, Default)]
pub struct StatusCell {
    inner: Rc<RefCell<TrackerStatus>>,
}

impl StatusCell {
    /// Create a status cell in the not-ready, not-detecting state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the tracker ready (detector loaded, capture live)
    pub fn mark_ready(&self) {
        self.inner.borrow_mut().is_ready = true;
    }

    /// Record whether the current frame contained a face
    pub fn set_detecting(&self, detecting: bool) {
        self.inner.borrow_mut().is_detecting = detecting;
    }

    /// Record a terminal failure. Only the first failure is kept.
    pub fn fail(&self, message: impl Into<String>) {
        let mut status = self.inner.borrow_mut();
        if status.error.is_none() {
            status.error = Some(message.into());
        }
        status.is_detecting = false;
    }

    /// Snapshot the current status for display
    #[must_use]
    pub fn snapshot(&self) -> TrackerStatus {
        self.inner.borrow().clone()
    }
}
