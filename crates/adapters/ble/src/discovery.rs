//! Discovery loop — scan-and-retry until the peripheral shows up.

use std::time::Duration;

use tokio::sync::watch;

use wavekey_app::activity_log::ActivityLog;

use crate::link::CommandLink as _;
use crate::scanner::PeripheralScanner;

/// Repeatedly scans for the named peripheral with a fixed backoff.
///
/// There is no maximum retry count: the host runs unattended and simply
/// waits for the peripheral to power on. A miss is transient by definition
/// and never surfaces as an error — the loop only ends by finding a device
/// or by external shutdown.
pub struct DiscoveryLoop<S> {
    scanner: S,
    device_name: String,
    retry_interval: Duration,
    log: ActivityLog,
}

impl<S: PeripheralScanner> DiscoveryLoop<S> {
    /// Create a loop over the given scanner.
    pub fn new(
        scanner: S,
        device_name: impl Into<String>,
        retry_interval: Duration,
        log: ActivityLog,
    ) -> Self {
        Self {
            scanner,
            device_name: device_name.into(),
            retry_interval,
            log,
        }
    }

    /// Scan until the peripheral is found.
    ///
    /// Returns `None` only when shutdown is signalled mid-wait; otherwise
    /// blocks for as many passes as it takes.
    pub async fn find_peripheral(&self, shutdown: &mut watch::Receiver<bool>) -> Option<S::Link> {
        loop {
            self.log
                .append(format!("scanning for '{}'", self.device_name));

            match self.scanner.scan_once(&self.device_name).await {
                Ok(Some(link)) => {
                    tracing::info!(name = %self.device_name, address = %link.address(), "peripheral found");
                    self.log.append(format!(
                        "found '{}' at {}",
                        self.device_name,
                        link.address()
                    ));
                    return Some(link);
                }
                Ok(None) => {
                    self.log
                        .append(format!("'{}' not found, retrying", self.device_name));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "scan pass failed, retrying next interval");
                    self.log.append(format!("scan failed: {err}"));
                }
            }

            tokio::select! {
                () = tokio::time::sleep(self.retry_interval) => {}
                _ = shutdown.changed() => return None,
            }
        }
    }
}
