//! Client library for the halo chain.
//!
//! Builds, signs and submits halo transactions to a router, and assembles the
//! one-time genesis transfer posted through everPay.

pub mod client;
pub mod config;
pub mod everpay;
pub mod genesis;
pub mod observability;
pub mod router;
pub mod signer;
pub mod transaction;

pub use client::{ClientError, ClientResult, HaloClient};
pub use config::ClientConfig;
pub use router::RouterClient;
pub use signer::Signer;
pub use transaction::{Transaction, TxAction, TxParams};
