//! # wavekey-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement (driven/outbound ports):
//!   - `AudioControl`, `ScreenCapture`, `BrightnessControl` — host capabilities
//!   - `CommandClassifier` — the swappable audio-classifier collaborator
//! - Define the **driving port** every command source converges on:
//!   - `CommandSink` — implemented by [`dispatcher::CommandDispatcher`]
//! - Provide the use-case machinery:
//!   - [`registry::CommandRegistry`] — token → fixed host action
//!   - [`executor::ActionExecutor`] — runs one action, catches failures
//!   - [`dispatcher::CommandDispatcher`] — serializes execution, logs
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   - [`activity_log::ActivityLog`] — the shared append-only event log
//!
//! ## Dependency rule
//! Depends on `wavekey-domain` only (plus `tokio::sync` for the critical
//! section). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod activity_log;
pub mod dispatcher;
pub mod executor;
pub mod ports;
pub mod registry;
