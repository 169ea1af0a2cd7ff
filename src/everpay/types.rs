//! everPay API types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signer::SignerError;

/// `GET /info`, reduced to what a transfer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EverpayInfo {
    pub fee_recipient: String,
    pub token_list: Vec<EverpayToken>,
}

/// A token entry from everPay's token list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EverpayToken {
    pub tag: String,
    pub id: String,
    pub symbol: String,
    pub decimals: u32,
    pub chain_type: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
}

impl EverpayInfo {
    /// Find a token by exact tag, else by case-insensitive symbol.
    pub fn find_token(&self, tag_or_symbol: &str) -> Option<&EverpayToken> {
        if let Some(token) = self.token_list.iter().find(|t| t.tag == tag_or_symbol) {
            return Some(token);
        }

        let token = self
            .token_list
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(tag_or_symbol))?;
        tracing::warn!(
            requested = %tag_or_symbol,
            tag = %token.tag,
            "No token with that tag, matched by symbol"
        );
        Some(token)
    }
}

/// `GET /fee/{tokenTag}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeeResponse {
    pub fee: TokenFee,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenFee {
    pub token_tag: String,
    pub transfer_fee: String,
}

/// Outcome of `POST /tx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EverpaySubmitResponse {
    pub status: u16,
    pub body: String,
    pub ever_hash: String,
}

/// Errors that can occur talking to everPay.
#[derive(Debug, Error)]
pub enum EverpayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("everPay returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode everPay response: {0}")]
    Decode(String),

    #[error("Token '{0}' not found on everPay")]
    TokenNotFound(String),

    #[error(transparent)]
    Signer(#[from] SignerError),
}

/// Result type for everPay operations.
pub type EverpayResult<T> = Result<T, EverpayError>;
