//! # wavekey-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the manual-command endpoint (`POST /command`) as a thin façade
//!   over the same [`CommandDispatcher`](wavekey_app::dispatcher::CommandDispatcher)
//!   the wireless session feeds — no separate execution path, no per-request
//!   runtime.
//! - Expose the shared activity log read-only (`GET /logs`).
//! - Pass audio uploads through to the classifier collaborator
//!   (`POST /predict`).
//!
//! ## Dependency rule
//! Depends on `wavekey-app` (ports, dispatcher, activity log) and
//! `wavekey-domain`. Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
