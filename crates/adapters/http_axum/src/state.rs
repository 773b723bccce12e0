//! Shared application state for axum handlers.

use std::sync::Arc;

use wavekey_app::activity_log::ActivityLog;
use wavekey_app::dispatcher::CommandDispatcher;

/// Application state shared across all axum handlers.
///
/// Generic over the capability ports and the classifier to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers (and the
/// activity-log handle) are cloned.
pub struct AppState<AU, SC, BR, CL> {
    /// The serialization point shared with the wireless session.
    pub dispatcher: Arc<CommandDispatcher<AU, SC, BR>>,
    /// Read-only view over the shared activity log.
    pub log: ActivityLog,
    /// The audio-classifier collaborator.
    pub classifier: Arc<CL>,
}

impl<AU, SC, BR, CL> Clone for AppState<AU, SC, BR, CL> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            log: self.log.clone(),
            classifier: Arc::clone(&self.classifier),
        }
    }
}

impl<AU, SC, BR, CL> AppState<AU, SC, BR, CL> {
    /// Create state from the shared dispatcher, log, and classifier.
    pub fn new(
        dispatcher: Arc<CommandDispatcher<AU, SC, BR>>,
        log: ActivityLog,
        classifier: Arc<CL>,
    ) -> Self {
        Self {
            dispatcher,
            log,
            classifier,
        }
    }
}
