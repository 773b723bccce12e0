//! # wavekey-domain
//!
//! Domain model for wavekey — the vocabulary shared by every other crate.
//!
//! ## Responsibilities
//! - Define [`command::CommandToken`] — the decoded, canonical form of one
//!   peripheral instruction — and [`command::CommandOrigin`].
//! - Define [`outcome::ActionOutcome`] — the result of executing one token.
//! - Define [`log::LogEntry`] — one human-readable activity-log event.
//! - Define the error types crossing port boundaries.
//!
//! ## Dependency rule
//! Depends on nothing but serde/chrono/thiserror. Never imports app or
//! adapter crates.

pub mod command;
pub mod error;
pub mod log;
pub mod outcome;
