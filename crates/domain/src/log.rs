//! Log entry — one human-readable event in the shared activity log.

use chrono::{DateTime, Utc};

/// One timestamped, human-readable activity-log event.
///
/// Total ordering is insertion order; the timestamp is informational and
/// recorded at append time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// When the entry was appended.
    pub at: DateTime<Utc>,
    /// The rendered event text.
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
