//! Command dispatcher — the single serialization point for all origins.

use std::future::Future;

use tokio::sync::Mutex;

use wavekey_domain::command::{CommandOrigin, CommandToken};
use wavekey_domain::outcome::ActionOutcome;

use crate::activity_log::ActivityLog;
use crate::executor::ActionExecutor;
use crate::ports::{AudioControl, BrightnessControl, ScreenCapture};

/// Driving port every command source converges on.
///
/// Implemented by [`CommandDispatcher`]; the wireless session is generic
/// over this trait so its state machine is testable with a recording fake.
pub trait CommandSink: Send + Sync {
    /// Submit one token for execution and wait for its outcome.
    fn submit(
        &self,
        token: CommandToken,
        origin: CommandOrigin,
    ) -> impl Future<Output = ActionOutcome> + Send;
}

/// Serializes command execution across the wireless and HTTP paths.
///
/// A `tokio` mutex guards the executor so at most one host action is in
/// flight at any instant, regardless of how many callers submit
/// concurrently. Every submission appends exactly two activity-log entries:
/// one for receipt, one for the outcome. In-flight actions run to
/// completion during shutdown — the critical section is never aborted.
pub struct CommandDispatcher<A, S, B> {
    executor: ActionExecutor<A, S, B>,
    log: ActivityLog,
    gate: Mutex<()>,
}

impl<A, S, B> CommandDispatcher<A, S, B>
where
    A: AudioControl,
    S: ScreenCapture,
    B: BrightnessControl,
{
    /// Create a dispatcher around the given executor and shared log.
    pub fn new(executor: ActionExecutor<A, S, B>, log: ActivityLog) -> Self {
        Self {
            executor,
            log,
            gate: Mutex::new(()),
        }
    }

    /// Execute one token under the serialization gate.
    #[tracing::instrument(skip_all, fields(%token, %origin))]
    pub async fn submit(&self, token: CommandToken, origin: CommandOrigin) -> ActionOutcome {
        self.log.append(format!("received '{token}' via {origin}"));

        let outcome = {
            let _serialized = self.gate.lock().await;
            self.executor.execute(token).await
        };

        self.log.append(format!("'{token}' {outcome}"));
        outcome
    }
}

impl<A, S, B> CommandSink for CommandDispatcher<A, S, B>
where
    A: AudioControl,
    S: ScreenCapture,
    B: BrightnessControl,
{
    async fn submit(&self, token: CommandToken, origin: CommandOrigin) -> ActionOutcome {
        Self::submit(self, token, origin).await
    }
}
