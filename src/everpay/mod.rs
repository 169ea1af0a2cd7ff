//! everPay payment network.
//!
//! Only what the genesis submission needs: the token list, the transfer fee
//! and posting a signed transfer.

pub mod client;
pub mod transaction;
pub mod types;

pub use client::EverpayClient;
pub use transaction::EverTransaction;
pub use types::{EverpayError, EverpayInfo, EverpayResult, EverpaySubmitResponse, EverpayToken};
