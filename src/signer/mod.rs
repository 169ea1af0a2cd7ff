//! Key material and message signing.
//!
//! # Data Flow
//! ```text
//! wallet file or HALO_PRIVATE_KEY
//!     → key.rs (detect Arweave JWK vs. hex secp256k1 key)
//!     → ethereum.rs / arweave.rs (address derivation, signing)
//!     → signature string attached to a transaction
//! ```
//!
//! # Security Constraints
//! - Keys are never logged or serialized
//! - Both schemes sign the EIP-191 digest of the canonical message

pub mod arweave;
pub mod ethereum;
pub mod key;
pub mod types;

pub use arweave::ArweaveSigner;
pub use ethereum::EthereumSigner;
pub use key::Signer;
pub use types::{SignerError, SignerKind, SignerResult, PRIVATE_KEY_ENV_VAR};
