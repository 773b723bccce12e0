//! Connected-link transport — subscribe to the command characteristic and
//! stream raw frames.
//!
//! [`CommandLink`] is the seam between the session state machine and the
//! radio: the production implementation ([`BtleLink`]) wraps a `btleplug`
//! peripheral, while tests drive the session with an in-memory fake.

use std::future::Future;
use std::time::Duration;

use btleplug::api::{Central as _, CentralEvent, Peripheral as _};
use btleplug::platform::{Adapter, Peripheral};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::StreamExt as _;
use uuid::Uuid;

use crate::config::LinkConfig;
use crate::error::LinkError;

/// One established session transport to the peripheral.
///
/// The handle is owned exclusively by the session for its lifetime; after
/// [`close`](Self::close) (or transport loss) it must not be reused.
pub trait CommandLink: Send {
    /// Peer address, for log lines.
    fn address(&self) -> String;

    /// Establish the connection and subscribe to the command characteristic.
    ///
    /// Returns the inbound frame channel. The channel ends (yields `None`)
    /// when the transport drops — that is the session's disconnect signal.
    fn open(&mut self) -> impl Future<Output = Result<mpsc::Receiver<Vec<u8>>, LinkError>> + Send;

    /// Tear the transport down. Idempotent; always safe to call on exit.
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}

/// Production [`CommandLink`] over a `btleplug` peripheral.
pub struct BtleLink {
    adapter: Adapter,
    peripheral: Peripheral,
    characteristic_uuid: Uuid,
    connect_timeout: Duration,
    forwarder: Option<JoinHandle<()>>,
}

impl BtleLink {
    pub(crate) fn new(adapter: Adapter, peripheral: Peripheral, config: &LinkConfig) -> Self {
        Self {
            adapter,
            peripheral,
            characteristic_uuid: config.characteristic_uuid,
            connect_timeout: config.connect_timeout(),
            forwarder: None,
        }
    }
}

impl CommandLink for BtleLink {
    fn address(&self) -> String {
        self.peripheral.address().to_string()
    }

    async fn open(&mut self) -> Result<mpsc::Receiver<Vec<u8>>, LinkError> {
        // Hard timeout: BlueZ's connect can block indefinitely when the
        // peripheral went out of range between discovery and now.
        tokio::time::timeout(self.connect_timeout, self.peripheral.connect())
            .await
            .map_err(|_| LinkError::ConnectTimeout)??;

        self.peripheral.discover_services().await?;
        let characteristic = self
            .peripheral
            .characteristics()
            .into_iter()
            .find(|c| c.uuid == self.characteristic_uuid)
            .ok_or(LinkError::CharacteristicNotFound {
                uuid: self.characteristic_uuid,
            })?;
        self.peripheral.subscribe(&characteristic).await?;

        let mut notifications = self.peripheral.notifications().await?;
        let mut events = self.adapter.events().await?;
        let peripheral_id = self.peripheral.id();
        let command_uuid = self.characteristic_uuid;
        let (tx, rx) = mpsc::channel(64);

        // One task owns the sender. It ends — closing the channel and
        // signalling disconnect to the session — when the notification
        // stream ends, when the adapter reports this peripheral gone, or
        // when the session drops the receiver.
        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    notification = notifications.next() => match notification {
                        Some(n) if n.uuid == command_uuid => {
                            if tx.send(n.value).await.is_err() {
                                break;
                            }
                        }
                        Some(_) => {}
                        None => break,
                    },
                    event = events.next() => match event {
                        Some(CentralEvent::DeviceDisconnected(id)) if id == peripheral_id => {
                            tracing::debug!(id = %id, "transport disconnect event");
                            break;
                        }
                        Some(_) => {}
                        None => break,
                    },
                }
            }
        });
        self.forwarder = Some(handle);

        Ok(rx)
    }

    async fn close(&mut self) {
        if let Some(handle) = self.forwarder.take() {
            handle.abort();
        }
        if let Err(err) = self.peripheral.disconnect().await {
            tracing::warn!(error = %err, "failed to disconnect peripheral");
        }
    }
}
