//! Shared activity log — append-only, thread-safe, read by the HTTP façade.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use wavekey_domain::log::LogEntry;

/// Default retention when none is configured.
const DEFAULT_CAPACITY: usize = 1024;

struct Inner {
    capacity: Option<usize>,
    entries: RwLock<VecDeque<LogEntry>>,
}

/// Cheaply-cloneable handle to the shared activity log.
///
/// Appends never fail and hold the write lock only long enough to push one
/// entry; snapshots are prefix-consistent — every entry appended before the
/// snapshot call appears in the result, in insertion order.
///
/// Retention is a ring buffer: once `capacity` entries are held, the oldest
/// entry is dropped on each append. A capacity of `None` disables eviction.
#[derive(Clone)]
pub struct ActivityLog {
    inner: Arc<Inner>,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(Some(DEFAULT_CAPACITY))
    }
}

impl ActivityLog {
    /// Create a log with the given retention. `None` grows without bound.
    #[must_use]
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            inner: Arc::new(Inner {
                capacity,
                entries: RwLock::new(VecDeque::new()),
            }),
        }
    }

    /// Append one entry, stamped with the current time.
    pub fn append(&self, message: impl Into<String>) {
        let entry = LogEntry::now(message);
        tracing::debug!(message = %entry.message, "activity log append");
        // A poisoned lock means another appender panicked mid-push; the
        // queue itself is still structurally sound, so keep logging.
        let mut entries = match self.inner.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(capacity) = self.inner.capacity {
            while entries.len() >= capacity.max(1) {
                entries.pop_front();
            }
        }
        entries.push_back(entry);
    }

    /// All retained entries, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LogEntry> {
        let entries = match self.inner.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.iter().cloned().collect()
    }

    /// The retained entries rendered as plain message strings.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let entries = match self.inner.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.iter().map(|entry| entry.message.clone()).collect()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.inner.entries.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Whether the log currently holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
