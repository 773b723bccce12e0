//! Wireless-link error types.

/// Errors specific to the wireless-link adapter.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// No Bluetooth adapter found on the host.
    #[error("no Bluetooth adapter available")]
    NotAvailable,

    /// A BLE operation (scan, connect, subscribe) failed.
    #[error("BLE operation failed")]
    Ble(#[from] btleplug::Error),

    /// The connected peripheral does not expose the command characteristic.
    #[error("characteristic {uuid} not found")]
    CharacteristicNotFound {
        /// The characteristic that was looked up.
        uuid: uuid::Uuid,
    },

    /// The transport connect call did not complete within the deadline.
    #[error("connection attempt timed out")]
    ConnectTimeout,
}
