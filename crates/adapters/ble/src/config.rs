//! Wireless-link configuration.

use std::time::Duration;

use serde::Deserialize;
use uuid::{Uuid, uuid};

/// Configuration for discovery and the connected session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Advertised local name of the command peripheral.
    pub device_name: String,
    /// GATT service the peripheral exposes.
    pub service_uuid: Uuid,
    /// Notification characteristic carrying the command words.
    pub characteristic_uuid: Uuid,
    /// Length of one discovery scan pass, in seconds.
    pub scan_pass_secs: u16,
    /// Backoff between scan passes when the peripheral was not seen.
    pub retry_interval_secs: u16,
    /// Hard timeout on the transport connect call.
    pub connect_timeout_secs: u16,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            device_name: "ESP32_Control".to_owned(),
            service_uuid: uuid!("4fafc201-1fb5-459e-8fcc-c5c9c331914b"),
            characteristic_uuid: uuid!("beb5483e-36e1-4688-b7f5-ea07361b26a8"),
            scan_pass_secs: 2,
            retry_interval_secs: 1,
            connect_timeout_secs: 10,
        }
    }
}

impl LinkConfig {
    /// Duration of one scan pass.
    #[must_use]
    pub fn scan_pass(&self) -> Duration {
        Duration::from_secs(u64::from(self.scan_pass_secs))
    }

    /// Backoff between scan passes.
    #[must_use]
    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.retry_interval_secs))
    }

    /// Transport connect timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_secs))
    }
}
