//! Router API types and error definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::genesis::types::{null_as_default, RouterState};
use crate::transaction::TxContext;

/// Fee charged by the router for every client transaction.
pub const DEFAULT_TX_FEE: &str = "0";

/// `GET /info`: state summary of the halo chain.
///
/// Only the fields the client uses are typed; the CLI prints the raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfoResponse {
    pub dapp: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub govern: String,
    pub fee_recipient: String,
    pub router_min_stake: String,
    #[serde(deserialize_with = "null_as_default")]
    pub routers: Vec<String>,
    #[serde(rename = "routerState", deserialize_with = "null_as_default")]
    pub router_states: BTreeMap<String, RouterState>,
    #[serde(deserialize_with = "null_as_default")]
    pub stake_pools: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub only_un_stake_pools: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub proposal_ids: Vec<String>,
    pub latest_tx_hash: String,
    pub latest_tx_ever_hash: String,
    pub genesis_tx_ever_hash: String,
    pub halo_addr: String,
}

impl InfoResponse {
    /// Chain fields a new transaction must carry.
    pub fn tx_context(&self) -> RouterResult<TxContext> {
        if self.dapp.is_empty() || self.chain_id.is_empty() {
            return Err(RouterError::InvalidInfo(
                "dapp or chainID missing from /info".to_string(),
            ));
        }
        Ok(TxContext {
            dapp: self.dapp.clone(),
            chain_id: self.chain_id.clone(),
            fee: DEFAULT_TX_FEE.to_string(),
            fee_recipient: self.fee_recipient.clone(),
        })
    }
}

/// Outcome of `POST /submit`, kept verbatim for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: String,
    /// everPay hash of the bundle carrying the tx, when the router returns one.
    pub ever_hash: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitBody {
    pub ever_hash: Option<String>,
}

/// Errors that can occur talking to the router.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Connection, timeout or body-read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; the body is kept for the user.
    #[error("Router returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response was not the expected JSON.
    #[error("Failed to decode router response: {0}")]
    Decode(String),

    /// `/info` lacked fields needed to build transactions.
    #[error("Invalid router info: {0}")]
    InvalidInfo(String),
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
