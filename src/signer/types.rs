//! Signer kinds and error definitions.

use std::fmt;
use thiserror::Error;

/// Environment variable holding a hex-encoded Ethereum private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "HALO_PRIVATE_KEY";

/// The account family a signer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignerKind {
    /// secp256k1 key, EIP-55 address.
    Ethereum,
    /// RSA key from an Arweave JWK, base64url address.
    Arweave,
}

impl SignerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignerKind::Ethereum => "ethereum",
            SignerKind::Arweave => "arweave",
        }
    }
}

impl fmt::Display for SignerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while loading keys or signing.
#[derive(Debug, Error)]
pub enum SignerError {
    /// Wallet file could not be read.
    #[error("Failed to read wallet file '{path}': {source}")]
    ReadWallet {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Hex private key did not parse.
    #[error("Invalid private key format: {0}")]
    InvalidKey(String),

    /// Arweave JWK was malformed or inconsistent.
    #[error("Invalid Arweave key file: {0}")]
    InvalidJwk(String),

    /// Neither a wallet file nor the key variable was provided.
    #[error("Environment variable {0} not set")]
    MissingEnv(&'static str),

    /// The signing primitive failed.
    #[error("Signing failed: {0}")]
    Signing(String),
}

/// Result type for signer operations.
pub type SignerResult<T> = Result<T, SignerError>;
