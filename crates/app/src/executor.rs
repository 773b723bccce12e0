//! Action executor — runs one host action and reports the outcome.

use std::time::Duration;

use wavekey_domain::command::CommandToken;
use wavekey_domain::error::ActionError;
use wavekey_domain::outcome::ActionOutcome;

use crate::ports::{AudioControl, BrightnessControl, ScreenCapture};
use crate::registry::{CommandRegistry, HostAction};

/// Executes host actions through injected capability ports.
///
/// Capability failures are caught here and converted into
/// [`ActionOutcome::Failed`] — they never propagate as errors or panics.
/// Each action is additionally bounded by `action_timeout` so a stuck
/// capability call (e.g. a hanging capture) cannot stall the dispatcher
/// indefinitely.
pub struct ActionExecutor<A, S, B> {
    audio: A,
    screen: S,
    brightness: B,
    action_timeout: Duration,
}

impl<A, S, B> ActionExecutor<A, S, B>
where
    A: AudioControl,
    S: ScreenCapture,
    B: BrightnessControl,
{
    /// Create an executor over the given capability implementations.
    pub fn new(audio: A, screen: S, brightness: B, action_timeout: Duration) -> Self {
        Self {
            audio,
            screen,
            brightness,
            action_timeout,
        }
    }

    /// Execute the action mapped to `token`, returning exactly one outcome.
    ///
    /// Unmapped tokens yield a [`ActionOutcome::Skipped`] no-op with a
    /// warning; capability errors and timeouts yield
    /// [`ActionOutcome::Failed`].
    pub async fn execute(&self, token: CommandToken) -> ActionOutcome {
        let Some(action) = CommandRegistry::action_for(token) else {
            tracing::warn!(%token, "unrecognised command, skipping");
            return ActionOutcome::Skipped(format!("no action mapped for '{token}'"));
        };

        match tokio::time::timeout(self.action_timeout, self.apply(action)).await {
            Ok(Ok(message)) => ActionOutcome::Completed(message),
            Ok(Err(err)) => {
                tracing::error!(%token, error = %err, "host action failed");
                ActionOutcome::Failed(err.to_string())
            }
            Err(_) => {
                tracing::error!(%token, timeout_secs = self.action_timeout.as_secs(), "host action timed out");
                ActionOutcome::Failed(format!(
                    "action timed out after {} s",
                    self.action_timeout.as_secs()
                ))
            }
        }
    }

    async fn apply(&self, action: HostAction) -> Result<String, ActionError> {
        match action {
            HostAction::SetVolume(level) => {
                self.audio.set_volume(level).await?;
                Ok(format!("volume set to {level}"))
            }
            HostAction::CaptureScreenshot => {
                let path = self.screen.capture().await?;
                Ok(format!("screenshot saved to {}", path.display()))
            }
            HostAction::SetBrightness(percent) => {
                self.brightness.set_brightness(percent).await?;
                Ok(format!("brightness set to {percent}%"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::Mutex;

    use crate::ports::VolumeLevel;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeAudio {
        applied: Arc<Mutex<Vec<VolumeLevel>>>,
        fail: bool,
    }

    impl AudioControl for FakeAudio {
        async fn set_volume(&self, level: VolumeLevel) -> Result<(), ActionError> {
            if self.fail {
                return Err(ActionError::Unavailable("audio endpoint"));
            }
            self.applied.lock().unwrap().push(level);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct FakeScreen {
        hang: bool,
    }

    impl ScreenCapture for FakeScreen {
        async fn capture(&self) -> Result<PathBuf, ActionError> {
            if self.hang {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            Ok(PathBuf::from("/tmp/screenshot.png"))
        }
    }

    #[derive(Clone, Default)]
    struct FakeBrightness {
        applied: Arc<Mutex<Vec<u8>>>,
    }

    impl BrightnessControl for FakeBrightness {
        async fn set_brightness(&self, percent: u8) -> Result<(), ActionError> {
            self.applied.lock().unwrap().push(percent);
            Ok(())
        }
    }

    fn executor(
        audio: FakeAudio,
        screen: FakeScreen,
    ) -> ActionExecutor<FakeAudio, FakeScreen, FakeBrightness> {
        ActionExecutor::new(
            audio,
            screen,
            FakeBrightness::default(),
            Duration::from_millis(200),
        )
    }

    #[tokio::test]
    async fn should_complete_volume_command_with_max_level() {
        let audio = FakeAudio::default();
        let exec = executor(audio.clone(), FakeScreen::default());

        let outcome = exec.execute(CommandToken::VolumeOn).await;

        assert_eq!(
            outcome,
            ActionOutcome::Completed("volume set to maximum".into())
        );
        assert_eq!(audio.applied.lock().unwrap().as_slice(), &[VolumeLevel::Max]);
    }

    #[tokio::test]
    async fn should_complete_screenshot_with_path_in_message() {
        let exec = executor(FakeAudio::default(), FakeScreen::default());

        let outcome = exec.execute(CommandToken::Screenshot).await;

        assert_eq!(
            outcome,
            ActionOutcome::Completed("screenshot saved to /tmp/screenshot.png".into())
        );
    }

    #[tokio::test]
    async fn should_skip_unknown_token_without_touching_capabilities() {
        let audio = FakeAudio::default();
        let exec = executor(audio.clone(), FakeScreen::default());

        let outcome = exec.execute(CommandToken::Unknown).await;

        assert!(matches!(outcome, ActionOutcome::Skipped(_)));
        assert!(audio.applied.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_convert_capability_error_to_failed_outcome() {
        let audio = FakeAudio {
            fail: true,
            ..FakeAudio::default()
        };
        let exec = executor(audio, FakeScreen::default());

        let outcome = exec.execute(CommandToken::VolumeOff).await;

        assert_eq!(
            outcome,
            ActionOutcome::Failed("audio endpoint unavailable".into())
        );
    }

    #[tokio::test]
    async fn should_fail_when_action_exceeds_timeout() {
        let screen = FakeScreen { hang: true };
        let exec = executor(FakeAudio::default(), screen);

        let outcome = exec.execute(CommandToken::Screenshot).await;

        assert!(matches!(outcome, ActionOutcome::Failed(detail) if detail.contains("timed out")));
    }

    #[tokio::test]
    async fn should_apply_fixed_brightness_percentages() {
        let brightness = FakeBrightness::default();
        let exec = ActionExecutor::new(
            FakeAudio::default(),
            FakeScreen::default(),
            brightness.clone(),
            Duration::from_millis(200),
        );

        exec.execute(CommandToken::BrightnessOn).await;
        exec.execute(CommandToken::BrightnessOff).await;

        assert_eq!(brightness.applied.lock().unwrap().as_slice(), &[100, 0]);
    }
}
