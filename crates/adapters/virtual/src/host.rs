//! Simulated host-capability implementations.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use wavekey_app::ports::{AudioControl, BrightnessControl, ScreenCapture, VolumeLevel};
use wavekey_domain::error::ActionError;

/// Simulated master-volume control. Remembers the last applied level.
#[derive(Clone, Default)]
pub struct VirtualAudio {
    level: Arc<RwLock<Option<VolumeLevel>>>,
}

impl VirtualAudio {
    /// The most recently applied level, if any.
    #[must_use]
    pub fn level(&self) -> Option<VolumeLevel> {
        *self.level.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl AudioControl for VirtualAudio {
    async fn set_volume(&self, level: VolumeLevel) -> Result<(), ActionError> {
        tracing::info!(%level, "virtual audio: master volume applied");
        *self
            .level
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(level);
        Ok(())
    }
}

/// Simulated display-brightness control. Remembers the last percentage.
#[derive(Clone, Default)]
pub struct VirtualBrightness {
    percent: Arc<RwLock<Option<u8>>>,
}

impl VirtualBrightness {
    /// The most recently applied percentage, if any.
    #[must_use]
    pub fn percent(&self) -> Option<u8> {
        *self
            .percent
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl BrightnessControl for VirtualBrightness {
    async fn set_brightness(&self, percent: u8) -> Result<(), ActionError> {
        tracing::info!(percent, "virtual brightness applied");
        *self
            .percent
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(percent);
        Ok(())
    }
}

/// PNG file signature, enough for a placeholder capture.
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Simulated screen capture. Writes a placeholder image into a fixed
/// directory and returns its path — the same observable contract as a real
/// capture, without touching the display server.
#[derive(Clone)]
pub struct VirtualScreen {
    dir: PathBuf,
}

impl VirtualScreen {
    /// Capture files go into `dir`, created on first use.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory captures are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ScreenCapture for VirtualScreen {
    async fn capture(&self) -> Result<PathBuf, ActionError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join("screenshot.png");
        tokio::fs::write(&path, PNG_SIGNATURE).await?;
        tracing::info!(path = %path.display(), "virtual screen captured");
        Ok(path)
    }
}
