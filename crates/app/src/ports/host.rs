//! Host-capability ports — the narrow interfaces the executor calls.
//!
//! Each concrete capability (system audio, screen capture, display
//! brightness) lives in an adapter crate and is injected into
//! [`ActionExecutor`](crate::executor::ActionExecutor) at construction, so
//! tests can substitute a fake.

use std::future::Future;
use std::path::PathBuf;

use wavekey_domain::error::ActionError;

/// The two fixed volume positions the command vocabulary can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    /// Master volume at its minimum (effectively muted).
    Min,
    /// Master volume at its maximum.
    Max,
}

impl std::fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Min => f.write_str("minimum"),
            Self::Max => f.write_str("maximum"),
        }
    }
}

/// Master-volume control.
pub trait AudioControl: Send + Sync {
    /// Set the master volume to the given fixed level.
    fn set_volume(
        &self,
        level: VolumeLevel,
    ) -> impl Future<Output = Result<(), ActionError>> + Send;
}

/// Screen capture.
pub trait ScreenCapture: Send + Sync {
    /// Capture the screen and return the path the image was written to.
    fn capture(&self) -> impl Future<Output = Result<PathBuf, ActionError>> + Send;
}

/// Display-brightness control.
pub trait BrightnessControl: Send + Sync {
    /// Set the display brightness to the given percentage (0–100).
    fn set_brightness(&self, percent: u8)
    -> impl Future<Output = Result<(), ActionError>> + Send;
}
