//! # wavekey-adapter-ble
//!
//! Wireless-link adapter — the client side of the command peripheral.
//!
//! ## How it works
//!
//! The peripheral advertises a fixed local name and exposes one GATT
//! characteristic that pushes each spoken command as a short UTF-8 word.
//! This adapter owns the whole client lifecycle:
//!
//! 1. [`discovery::DiscoveryLoop`] — scan by name, fixed-interval retry,
//!    forever (the host is expected to run unattended and wait for the
//!    peripheral to power on).
//! 2. [`link::BtleLink`] — connect with a hard timeout, discover services,
//!    subscribe to the command characteristic, watch for transport loss.
//! 3. [`session::LinkSession`] — decode each notification and hand it to
//!    the dispatcher, one frame at a time in arrival order.
//! 4. [`supervisor::run_link`] — on disconnect, re-enter discovery from the
//!    top; on shutdown, unwind cleanly.
//!
//! ## Dependency rule
//!
//! Depends on `wavekey-app` (the `CommandSink` port and activity log) and
//! `wavekey-domain`. Never imports other adapters.

pub mod config;
pub mod decoder;
pub mod discovery;
pub mod error;
pub mod link;
pub mod scanner;
pub mod session;
pub mod supervisor;

pub use config::LinkConfig;
pub use error::LinkError;
pub use scanner::BtleScanner;
pub use supervisor::run_link;

#[cfg(test)]
pub(crate) mod testing;
