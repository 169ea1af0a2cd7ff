//! Ethereum (secp256k1) signer.
//!
//! # Security
//! - The private key is parsed once and never logged
//! - Signatures are personal-message (EIP-191) signatures, 65 bytes `r || s || v`

use alloy::primitives::{eip191_hash_message, Address, Signature, B256};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer as _;

use crate::signer::types::{SignerError, SignerResult, PRIVATE_KEY_ENV_VAR};

/// Signer backed by a local secp256k1 private key.
#[derive(Debug, Clone)]
pub struct EthereumSigner {
    signer: PrivateKeySigner,
}

impl EthereumSigner {
    /// Create a signer from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    pub fn from_private_key(private_key_hex: &str) -> SignerResult<Self> {
        let trimmed = private_key_hex.trim();
        let key_hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| SignerError::InvalidKey(format!("{}", e)))?;

        tracing::debug!(address = %signer.address(), "Ethereum signer loaded");

        Ok(Self { signer })
    }

    /// Load the key from `HALO_PRIVATE_KEY`.
    pub fn from_env() -> SignerResult<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR)
            .map_err(|_| SignerError::MissingEnv(PRIVATE_KEY_ENV_VAR))?;

        Self::from_private_key(&private_key)
    }

    /// Get the signer's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign a 32-byte hash.
    pub async fn sign_hash(&self, hash: B256) -> SignerResult<Signature> {
        self.signer
            .sign_hash(&hash)
            .await
            .map_err(|e| SignerError::Signing(e.to_string()))
    }

    /// Sign `message` with the Ethereum prefix and return `0x`-hex.
    pub async fn sign_message(&self, message: &str) -> SignerResult<String> {
        let signature = self.sign_hash(eip191_hash_message(message)).await?;
        Ok(alloy::hex::encode_prefixed(signature.as_bytes()))
    }
}
