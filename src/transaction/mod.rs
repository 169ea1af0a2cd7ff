//! Halo transactions.
//!
//! # Data Flow
//! ```text
//! CLI arguments
//!     → params.rs (typed params, local checks, JSON encoding)
//!     → types.rs (Transaction assembly, canonical string, EIP-191 hash)
//!     → signer (signature over the canonical string)
//!     → router client (POST /submit)
//! ```

pub mod nonce;
pub mod params;
pub mod types;

pub use nonce::NonceGenerator;
pub use params::{
    parse_amount, CallParams, ProposeParams, StakeParams, TransferParams, TxParams,
};
pub use types::{Transaction, TxAction, TxContext, TxError, TxResult, TX_VERSION_V1};
