//! Halo router API.
//!
//! # Data Flow
//! ```text
//! RouterConfig (URL, timeout)
//!     → client.rs (reqwest, one request per call, no retries)
//!     → types.rs (InfoResponse, SubmitResponse, RouterError)
//! ```

pub mod client;
pub mod types;

pub use client::RouterClient;
pub use types::{InfoResponse, RouterError, RouterResult, SubmitResponse};
