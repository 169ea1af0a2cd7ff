//! Arweave (RSA) signer.
//!
//! Keys come from an Arweave JWK file. The account address is
//! base64url(SHA-256(modulus)); signatures are RSA-PSS/SHA-256 and travel as
//! `base64url(signature),owner` so the router can recover the public key.

use std::fmt;

use alloy::primitives::eip191_hash_message;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rsa::pss::BlindedSigningKey;
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::signer::types::{SignerError, SignerResult};

/// Private fields of an RSA JWK.
#[derive(Deserialize)]
struct Jwk {
    kty: String,
    n: String,
    e: String,
    d: String,
    p: String,
    q: String,
}

/// Signer backed by an Arweave RSA key.
#[derive(Clone)]
pub struct ArweaveSigner {
    key: RsaPrivateKey,
    owner: String,
    address: String,
}

impl ArweaveSigner {
    /// Parse a JWK document.
    pub fn from_jwk(jwk_json: &str) -> SignerResult<Self> {
        let jwk: Jwk = serde_json::from_str(jwk_json)
            .map_err(|e| SignerError::InvalidJwk(e.to_string()))?;
        if jwk.kty != "RSA" {
            return Err(SignerError::InvalidJwk(format!(
                "unsupported key type '{}'",
                jwk.kty
            )));
        }

        let key = RsaPrivateKey::from_components(
            decode_component("n", &jwk.n)?,
            decode_component("e", &jwk.e)?,
            decode_component("d", &jwk.d)?,
            vec![decode_component("p", &jwk.p)?, decode_component("q", &jwk.q)?],
        )
        .map_err(|e| SignerError::InvalidJwk(e.to_string()))?;
        key.validate()
            .map_err(|e| SignerError::InvalidJwk(e.to_string()))?;

        let modulus = key.n().to_bytes_be();
        let owner = URL_SAFE_NO_PAD.encode(&modulus);
        let address = URL_SAFE_NO_PAD.encode(Sha256::digest(&modulus));

        tracing::debug!(address = %address, "Arweave signer loaded");

        Ok(Self {
            key,
            owner,
            address,
        })
    }

    /// The 43-character account address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// base64url-encoded public modulus.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Sign the EIP-191 digest of `message`.
    pub fn sign_message(&self, message: &str) -> SignerResult<String> {
        let digest = eip191_hash_message(message);
        let signing_key = BlindedSigningKey::<Sha256>::new(self.key.clone());
        let signature = signing_key
            .try_sign_with_rng(&mut OsRng, digest.as_slice())
            .map_err(|e| SignerError::Signing(e.to_string()))?;

        Ok(format!(
            "{},{}",
            URL_SAFE_NO_PAD.encode(signature.to_bytes()),
            self.owner
        ))
    }
}

impl fmt::Debug for ArweaveSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArweaveSigner")
            .field("address", &self.address)
            .finish()
    }
}

fn decode_component(name: &str, value: &str) -> SignerResult<BigUint> {
    let bytes = URL_SAFE_NO_PAD
        .decode(value.trim_end_matches('='))
        .map_err(|e| SignerError::InvalidJwk(format!("field '{}': {}", name, e)))?;
    Ok(BigUint::from_bytes_be(&bytes))
}
