//! Demo classifier — a swappable stand-in for the offline model.

use wavekey_app::ports::CommandClassifier;
use wavekey_domain::command::CommandToken;
use wavekey_domain::error::ClassifyError;

/// Classifier stand-in that reads the uploaded payload as a UTF-8 wire word.
///
/// The real collaborator loads a trained model and feature scaler at process
/// start; those are opaque external artifacts. This implementation keeps the
/// `/predict` path exercisable end to end: `b"ses_ac"` classifies as the
/// volume-on token, anything outside the vocabulary as
/// [`CommandToken::Unknown`].
#[derive(Clone, Copy, Default)]
pub struct VirtualClassifier;

impl CommandClassifier for VirtualClassifier {
    async fn classify(&self, audio: &[u8]) -> Result<CommandToken, ClassifyError> {
        if audio.is_empty() {
            return Err(ClassifyError::InvalidAudio);
        }
        let text = std::str::from_utf8(audio).map_err(|_| ClassifyError::InvalidAudio)?;
        let token = CommandToken::from_wire(text.trim());
        tracing::debug!(%token, "virtual classifier prediction");
        Ok(token)
    }
}
