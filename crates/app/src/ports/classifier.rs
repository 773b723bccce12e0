//! Classifier port — the swappable audio-to-command collaborator.
//!
//! The actual model (feature extraction, trained weights, scaler) is an
//! offline artifact loaded by whichever adapter implements this trait; the
//! core only ever sees the `classify` contract.

use std::future::Future;

use wavekey_domain::command::CommandToken;
use wavekey_domain::error::ClassifyError;

/// Maps a recorded audio clip onto a command token.
pub trait CommandClassifier: Send + Sync {
    /// Classify raw audio bytes into a [`CommandToken`].
    fn classify(
        &self,
        audio: &[u8],
    ) -> impl Future<Output = Result<CommandToken, ClassifyError>> + Send;
}
