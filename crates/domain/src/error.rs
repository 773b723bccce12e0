//! Error types crossing port boundaries.

/// Failure reported by a host capability (audio, screen, brightness).
///
/// Always caught at the action-executor boundary and converted into a
/// [`ActionOutcome::Failed`](crate::outcome::ActionOutcome::Failed) —
/// never allowed to take the process down.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// The underlying host device or interface is not present.
    #[error("{0} unavailable")]
    Unavailable(&'static str),

    /// An IO failure while performing the action (e.g. writing a capture).
    #[error("io error during host action")]
    Io(#[from] std::io::Error),

    /// The capability was reachable but rejected or failed the request.
    #[error("host action failed: {0}")]
    Failed(String),
}

/// Failure reported by the command-classifier collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The uploaded payload is not something the classifier can read.
    #[error("audio payload could not be decoded")]
    InvalidAudio,

    /// The classifier backend (model, scaler) is not loaded.
    #[error("classifier unavailable")]
    Unavailable,

    /// The classifier ran but reported an error.
    #[error("classification failed: {0}")]
    Failed(String),
}
