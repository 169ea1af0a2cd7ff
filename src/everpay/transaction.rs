//! everPay transfer transactions.

use alloy::primitives::{eip191_hash_message, B256};
use serde::{Deserialize, Serialize};

use crate::everpay::types::{EverpayResult, EverpayToken};
use crate::signer::Signer;

pub const EVERPAY_TX_VERSION: &str = "v1";
pub const ACTION_TRANSFER: &str = "transfer";

/// An everPay transaction as posted to `/tx`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EverTransaction {
    pub token_symbol: String,
    pub action: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub fee: String,
    pub fee_recipient: String,
    pub nonce: String,
    #[serde(rename = "tokenID")]
    pub token_id: String,
    pub chain_type: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub data: String,
    pub version: String,
    #[serde(default)]
    pub sig: String,
}

impl EverTransaction {
    /// Unsigned transfer of `amount` base units of `token`.
    #[allow(clippy::too_many_arguments)]
    pub fn transfer(
        token: &EverpayToken,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: impl Into<String>,
        fee: impl Into<String>,
        fee_recipient: impl Into<String>,
        nonce: i64,
        data: impl Into<String>,
    ) -> Self {
        Self {
            token_symbol: token.symbol.clone(),
            action: ACTION_TRANSFER.to_string(),
            from: from.into(),
            to: to.into(),
            amount: amount.into(),
            fee: fee.into(),
            fee_recipient: fee_recipient.into(),
            nonce: nonce.to_string(),
            token_id: token.id.clone(),
            chain_type: token.chain_type.clone(),
            chain_id: token.chain_id.clone(),
            data: data.into(),
            version: EVERPAY_TX_VERSION.to_string(),
            sig: String::new(),
        }
    }

    /// Signed message. No trailing newline, unlike halo transactions.
    pub fn canonical_string(&self) -> String {
        [
            ("tokenSymbol", &self.token_symbol),
            ("action", &self.action),
            ("from", &self.from),
            ("to", &self.to),
            ("amount", &self.amount),
            ("fee", &self.fee),
            ("feeRecipient", &self.fee_recipient),
            ("nonce", &self.nonce),
            ("tokenID", &self.token_id),
            ("chainType", &self.chain_type),
            ("chainID", &self.chain_id),
            ("data", &self.data),
            ("version", &self.version),
        ]
        .iter()
        .map(|(k, v)| format!("{}:{}", k, v))
        .collect::<Vec<_>>()
        .join("\n")
    }

    pub fn hash(&self) -> B256 {
        eip191_hash_message(self.canonical_string())
    }

    /// everHash: `0x`-hex EIP-191 hash of the canonical string.
    pub fn ever_hash(&self) -> String {
        alloy::hex::encode_prefixed(self.hash())
    }

    pub async fn sign(&mut self, signer: &Signer) -> EverpayResult<()> {
        self.sig = signer.sign(&self.canonical_string()).await?;
        Ok(())
    }
}
