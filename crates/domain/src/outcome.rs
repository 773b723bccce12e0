//! Action outcome — the result of executing one command token.

/// Result of executing one [`CommandToken`](crate::command::CommandToken).
///
/// Consumed immediately into a log entry and, for HTTP-originated commands,
/// mapped onto the response status. `Skipped` is the mandatory no-op outcome
/// for unrecognised tokens and is not treated as a failure anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The host action ran to completion.
    Completed(String),
    /// No action is mapped for the token; nothing was executed.
    Skipped(String),
    /// The host capability was invoked but reported an error.
    Failed(String),
}

impl ActionOutcome {
    /// Whether this outcome should surface as an error to an HTTP caller.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The human-readable detail carried by the outcome.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Completed(msg) | Self::Skipped(msg) | Self::Failed(msg) => msg,
        }
    }
}

impl std::fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed(msg) => write!(f, "completed: {msg}"),
            Self::Skipped(msg) => write!(f, "skipped: {msg}"),
            Self::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}
