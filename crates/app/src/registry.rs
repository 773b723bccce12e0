//! Command registry — the fixed mapping from token to host action.

use wavekey_domain::command::CommandToken;

use crate::ports::VolumeLevel;

/// One concrete host action, with its fixed parameters resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Set the master volume.
    SetVolume(VolumeLevel),
    /// Capture the screen.
    CaptureScreenshot,
    /// Set display brightness to the given percentage.
    SetBrightness(u8),
}

/// Fixed lookup from command token to host action.
///
/// The mapping mirrors the device firmware's vocabulary: volume commands map
/// to the min/max level, brightness commands to 0/100 percent.
pub struct CommandRegistry;

impl CommandRegistry {
    /// Look up the action for a token. [`CommandToken::Unknown`] has no
    /// mapping and yields `None`.
    #[must_use]
    pub fn action_for(token: CommandToken) -> Option<HostAction> {
        match token {
            CommandToken::VolumeOn => Some(HostAction::SetVolume(VolumeLevel::Max)),
            CommandToken::VolumeOff => Some(HostAction::SetVolume(VolumeLevel::Min)),
            CommandToken::Screenshot => Some(HostAction::CaptureScreenshot),
            CommandToken::BrightnessOn => Some(HostAction::SetBrightness(100)),
            CommandToken::BrightnessOff => Some(HostAction::SetBrightness(0)),
            CommandToken::Unknown => None,
        }
    }
}
