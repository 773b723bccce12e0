//! Peripheral discovery — one scan pass at a time, matched by name.

use std::future::Future;

use btleplug::api::{Central as _, Manager as _, Peripheral as _, ScanFilter};
use btleplug::platform::{Adapter, Manager};

use crate::config::LinkConfig;
use crate::error::LinkError;
use crate::link::{BtleLink, CommandLink};

/// One-shot scanner port consumed by the discovery loop.
///
/// The trait seam keeps the retry/restart state machine testable without
/// radio hardware; [`BtleScanner`] is the production implementation.
pub trait PeripheralScanner: Send + Sync {
    /// The link type handed to the session on a successful match.
    type Link: CommandLink + 'static;

    /// Run one scan pass. `Ok(Some(..))` when a peripheral advertising
    /// exactly `name` was observed during the pass.
    fn scan_once(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Self::Link>, LinkError>> + Send;
}

/// Production scanner over the host's first Bluetooth adapter.
pub struct BtleScanner {
    adapter: Adapter,
    config: LinkConfig,
}

impl BtleScanner {
    /// Create a scanner bound to the first available Bluetooth adapter.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotAvailable`] when the host has no Bluetooth
    /// adapter, or [`LinkError::Ble`] when the manager cannot be reached.
    pub async fn new(config: LinkConfig) -> Result<Self, LinkError> {
        let manager = Manager::new().await?;
        let adapters = manager.adapters().await?;
        let adapter = adapters.into_iter().next().ok_or(LinkError::NotAvailable)?;
        Ok(Self { adapter, config })
    }
}

impl PeripheralScanner for BtleScanner {
    type Link = BtleLink;

    async fn scan_once(&self, name: &str) -> Result<Option<BtleLink>, LinkError> {
        self.adapter.start_scan(ScanFilter::default()).await?;
        tokio::time::sleep(self.config.scan_pass()).await;
        let peripherals = self.adapter.peripherals().await?;
        self.adapter.stop_scan().await?;

        for peripheral in peripherals {
            let Ok(Some(props)) = peripheral.properties().await else {
                continue;
            };
            if props.local_name.as_deref() == Some(name) {
                tracing::debug!(%name, address = %props.address, "peripheral matched");
                return Ok(Some(BtleLink::new(
                    self.adapter.clone(),
                    peripheral,
                    &self.config,
                )));
            }
        }

        Ok(None)
    }
}
