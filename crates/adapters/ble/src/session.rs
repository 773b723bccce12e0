//! Link session — drives one connected peripheral to its end of life.

use std::sync::Arc;

use tokio::sync::watch;

use wavekey_app::activity_log::ActivityLog;
use wavekey_app::dispatcher::CommandSink;
use wavekey_domain::command::CommandOrigin;

use crate::decoder;
use crate::link::CommandLink;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The transport dropped (or never came up). The caller re-enters
    /// discovery from the top — there is no in-session reconnect.
    Disconnected,
    /// External shutdown was signalled; the caller unwinds.
    Shutdown,
}

/// Owns one connected-peripheral session.
///
/// Frames are processed strictly one at a time in arrival order: the next
/// notification is not consumed until the dispatcher has returned the
/// previous command's outcome. The link is always closed on the way out,
/// whichever way the session ends.
pub struct LinkSession<D> {
    dispatcher: Arc<D>,
    log: ActivityLog,
}

impl<D: CommandSink> LinkSession<D> {
    /// Create a session driver over the shared dispatcher and log.
    pub fn new(dispatcher: Arc<D>, log: ActivityLog) -> Self {
        Self { dispatcher, log }
    }

    /// Open the link and pump notifications until disconnect or shutdown.
    pub async fn run<L: CommandLink>(
        &self,
        link: &mut L,
        shutdown: &mut watch::Receiver<bool>,
    ) -> SessionEnd {
        let mut frames = match link.open().await {
            Ok(frames) => frames,
            Err(err) => {
                tracing::warn!(error = %err, "failed to open link session");
                self.log.append(format!("connection failed: {err}"));
                link.close().await;
                return SessionEnd::Disconnected;
            }
        };

        self.log.append(format!("connected to {}", link.address()));
        self.log.append("subscribed to command notifications");
        tracing::info!(address = %link.address(), "link session established");

        let end = loop {
            tokio::select! {
                frame = frames.recv() => match frame {
                    Some(payload) => {
                        let token = decoder::decode(&payload);
                        tracing::debug!(%token, len = payload.len(), "notification received");
                        self.dispatcher
                            .submit(token, CommandOrigin::Wireless)
                            .await;
                    }
                    None => break SessionEnd::Disconnected,
                },
                _ = shutdown.changed() => break SessionEnd::Shutdown,
            }
        };

        link.close().await;
        match end {
            SessionEnd::Disconnected => {
                tracing::warn!("link lost, session closed");
                self.log.append("link lost, session closed");
            }
            SessionEnd::Shutdown => {
                tracing::info!("session closed");
                self.log.append("session closed");
            }
        }
        end
    }
}
