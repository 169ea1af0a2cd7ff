//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (url, action, nonce, status)
//!     → logging.rs (EnvFilter + fmt layer)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - stdout carries only command output so it can be piped
//! - Private keys never appear in events

pub mod logging;
