//! Halo transaction types, canonical form and error definitions.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::{eip191_hash_message, B256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signer::{Signer, SignerError};

/// The only transaction version the router accepts.
pub const TX_VERSION_V1: &str = "v1";

/// Actions understood by the halo router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxAction {
    Transfer,
    Stake,
    Unstake,
    /// Router registers itself.
    Join,
    /// Router deregisters itself.
    Leave,
    /// Governance code submission.
    Propose,
    /// Invoke a function on an accepted proposal.
    Call,
    /// Generated by routers from everPay bundles; never submitted by clients.
    Swap,
}

impl TxAction {
    pub const ALL: [TxAction; 8] = [
        TxAction::Transfer,
        TxAction::Stake,
        TxAction::Unstake,
        TxAction::Join,
        TxAction::Leave,
        TxAction::Propose,
        TxAction::Call,
        TxAction::Swap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TxAction::Transfer => "transfer",
            TxAction::Stake => "stake",
            TxAction::Unstake => "unstake",
            TxAction::Join => "join",
            TxAction::Leave => "leave",
            TxAction::Propose => "propose",
            TxAction::Call => "call",
            TxAction::Swap => "swap",
        }
    }
}

impl fmt::Display for TxAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxAction {
    type Err = TxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TxAction::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| TxError::InvalidParams(format!("unknown tx action '{}'", s)))
    }
}

/// Chain-wide fields every transaction repeats, taken from the router's `/info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxContext {
    pub dapp: String,
    pub chain_id: String,
    pub fee: String,
    pub fee_recipient: String,
}

/// A halo transaction as posted to `/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub dapp: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub action: TxAction,
    pub from: String,
    pub fee: String,
    pub fee_recipient: String,
    pub nonce: String,
    pub version: String,
    /// JSON-encoded action parameters.
    pub params: String,
    #[serde(default)]
    pub sig: String,
}

impl Transaction {
    /// Assemble an unsigned v1 transaction.
    pub fn new(
        ctx: &TxContext,
        action: TxAction,
        from: impl Into<String>,
        nonce: i64,
        params: impl Into<String>,
    ) -> Self {
        Self {
            dapp: ctx.dapp.clone(),
            chain_id: ctx.chain_id.clone(),
            action,
            from: from.into(),
            fee: ctx.fee.clone(),
            fee_recipient: ctx.fee_recipient.clone(),
            nonce: nonce.to_string(),
            version: TX_VERSION_V1.to_string(),
            params: params.into(),
            sig: String::new(),
        }
    }

    /// The exact string that gets hashed and signed. `sig` is excluded.
    pub fn canonical_string(&self) -> String {
        format!(
            "dapp:{}\nchainID:{}\naction:{}\nfrom:{}\nfee:{}\nfeeRecipient:{}\nnonce:{}\nversion:{}\nparams:{}\n",
            self.dapp,
            self.chain_id,
            self.action,
            self.from,
            self.fee,
            self.fee_recipient,
            self.nonce,
            self.version,
            self.params,
        )
    }

    /// EIP-191 hash of the canonical string.
    pub fn hash(&self) -> B256 {
        eip191_hash_message(self.canonical_string())
    }

    /// `0x`-prefixed lowercase hex of [`Transaction::hash`].
    pub fn hex_hash(&self) -> String {
        alloy::hex::encode_prefixed(self.hash())
    }

    /// Sign in place and return the signature.
    pub async fn sign(&mut self, signer: &Signer) -> TxResult<String> {
        let sig = signer.sign(&self.canonical_string()).await?;
        self.sig = sig.clone();
        Ok(sig)
    }

    pub fn is_signed(&self) -> bool {
        !self.sig.is_empty()
    }
}

/// Errors raised while building transactions.
#[derive(Debug, Error)]
pub enum TxError {
    /// Amount is not a non-negative decimal number.
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    /// Amount has more fractional digits than the token supports.
    #[error("Amount '{amount}' has more than {decimals} decimal places")]
    TooManyDecimals { amount: String, decimals: u8 },

    /// Receiver is neither an EVM nor an Arweave address.
    #[error("Invalid account ID '{0}'")]
    InvalidAccountId(String),

    /// A required parameter was empty.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// Parameters the router would reject.
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Failed to encode params: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Signer(#[from] SignerError),
}

/// Result type for transaction operations.
pub type TxResult<T> = Result<T, TxError>;
