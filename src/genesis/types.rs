//! Genesis payload and router-state types.

use std::collections::BTreeMap;

use alloy::primitives::eip191_hash_message;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::everpay::EverpayError;
use crate::signer::SignerError;

/// A swap pool served by a router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub token_x_tag: String,
    pub token_y_tag: String,
    pub fee_ratio: String,
}

impl Pool {
    pub fn canonical_string(&self) -> String {
        format!(
            "TokenXTag:{}\nTokenYTag:{}\nFeeRatio:{}",
            self.token_x_tag, self.token_y_tag, self.fee_ratio
        )
    }

    /// Pool ID: `0x`-hex EIP-191 hash of the canonical string.
    pub fn id(&self) -> String {
        alloy::hex::encode_prefixed(eip191_hash_message(self.canonical_string()))
    }
}

/// A token as listed on everPay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EverToken {
    /// Token ID on its native chain.
    pub id: String,
    pub tag: String,
    pub symbol: String,
    pub decimals: u32,
    pub chain_type: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
}

/// Public state a router publishes when it joins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterState {
    pub router: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub logo: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub http_endpoint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ws_endpoint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub swap_fee_ratio: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub swap_fee_recipient: String,
    /// Pool ID → pool.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pools: BTreeMap<String, Pool>,
    /// Token ID → token.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub ever_tokens: BTreeMap<String, EverToken>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lp_min_stake: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lp_penalty: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub info: String,
}

/// Go encodes nil slices and maps as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Initial chain state carried in the genesis transfer's `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisParams {
    pub dapp: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    /// Account allowed to submit proposals.
    pub govern: String,
    pub fee_recipient: String,
    pub router_min_stake: String,
    pub routers: Vec<String>,
    /// Router address → state.
    pub router_states: BTreeMap<String, RouterState>,
    pub stake_pools: Vec<String>,
    /// Pools that accept unstake only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub only_un_stake_pools: Vec<String>,
    pub token_symbol: String,
    pub token_total_supply: String,
    pub token_decimals: i64,
    /// Reserve pool → balance.
    pub token_balance: BTreeMap<String, String>,
    /// Account → stake pool → amount.
    pub token_stake: BTreeMap<String, BTreeMap<String, String>>,
}

/// Embedded mainnet genesis table.
pub const MAINNET_GENESIS_JSON: &str = include_str!("mainnet.json");

impl GenesisParams {
    pub fn mainnet() -> GenesisResult<Self> {
        Self::from_json(MAINNET_GENESIS_JSON)
    }

    pub fn from_json(json: &str) -> GenesisResult<Self> {
        serde_json::from_str(json).map_err(GenesisError::Parse)
    }

    /// Compact JSON placed in the everPay transaction's `data` field.
    pub fn to_data(&self) -> GenesisResult<String> {
        serde_json::to_string(self).map_err(GenesisError::Parse)
    }
}

/// A single failed genesis check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct GenesisIssue {
    pub field: String,
    pub message: String,
}

/// Errors raised by the genesis tool.
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("Failed to read genesis params '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid genesis JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Genesis validation failed: {}", join_issues(.0))]
    Invalid(Vec<GenesisIssue>),

    #[error(transparent)]
    Signer(#[from] SignerError),

    #[error(transparent)]
    Everpay(#[from] EverpayError),
}

fn join_issues(issues: &[GenesisIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for genesis operations.
pub type GenesisResult<T> = Result<T, GenesisError>;
