//! Link supervisor — the top-level discovery → session restart loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use wavekey_app::activity_log::ActivityLog;
use wavekey_app::dispatcher::CommandSink;

use crate::discovery::DiscoveryLoop;
use crate::scanner::PeripheralScanner;
use crate::session::{LinkSession, SessionEnd};

/// Run the wireless-link lifecycle until shutdown.
///
/// Discovery and session alternate: when a session ends with transport loss
/// the supervisor re-enters discovery from the top (the explicit restart
/// policy — sessions never reconnect silently). Shutdown exits the loop
/// after the current dispatch, if any, has completed.
pub async fn run_link<S, D>(
    scanner: S,
    device_name: String,
    retry_interval: Duration,
    dispatcher: Arc<D>,
    log: ActivityLog,
    mut shutdown: watch::Receiver<bool>,
) where
    S: PeripheralScanner,
    D: CommandSink,
{
    let discovery = DiscoveryLoop::new(scanner, device_name, retry_interval, log.clone());
    let session = LinkSession::new(dispatcher, log.clone());

    loop {
        let Some(mut link) = discovery.find_peripheral(&mut shutdown).await else {
            break;
        };
        match session.run(&mut link, &mut shutdown).await {
            SessionEnd::Disconnected => {}
            SessionEnd::Shutdown => break,
        }
    }

    log.append("wireless link stopped");
    tracing::info!("link supervisor stopped");
}
