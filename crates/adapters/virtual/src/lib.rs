//! # wavekey-adapter-virtual
//!
//! Simulated host capabilities for testing and demonstration.
//!
//! The concrete host actions (system audio, screen capture, display
//! brightness) and the audio classifier are external collaborators behind
//! narrow ports. This crate provides in-process stand-ins:
//!
//! | Implementation | Port | Behaviour |
//! |----------------|------|-----------|
//! | [`VirtualAudio`] | `AudioControl` | Records the last applied level |
//! | [`VirtualBrightness`] | `BrightnessControl` | Records the last applied percentage |
//! | [`VirtualScreen`] | `ScreenCapture` | Writes a placeholder capture file |
//! | [`VirtualClassifier`] | `CommandClassifier` | Reads the payload as a UTF-8 wire word |
//!
//! ## Dependency rule
//!
//! Depends on `wavekey-app` (port traits) and `wavekey-domain` only.

mod classifier;
mod host;

pub use classifier::VirtualClassifier;
pub use host::{VirtualAudio, VirtualBrightness, VirtualScreen};
