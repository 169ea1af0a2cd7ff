//! Action parameters and the local checks run before signing.
//!
//! The router re-validates everything; these checks only catch mistakes that
//! would certainly be rejected so no signature is wasted on them.

use std::str::FromStr;

use alloy::primitives::utils::{parse_units, ParseUnits};
use alloy::primitives::Address;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::genesis::types::RouterState;
use crate::transaction::types::{TxAction, TxError, TxResult};

/// Router limit, in UTF-8 bytes, on the free-form `info` of a join.
pub const MAX_ROUTER_INFO_LEN: usize = 250;

/// Length of a base64url-encoded SHA-256 address.
const AR_ADDRESS_LEN: usize = 43;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferParams {
    pub to: String,
    pub amount: String,
}

impl TransferParams {
    /// `amount` is in base units.
    pub fn new(to: &str, amount: &str) -> TxResult<Self> {
        Ok(Self {
            to: normalize_account_id(to)?,
            amount: check_base_units(amount)?,
        })
    }
}

/// Shared by stake and unstake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeParams {
    pub stake_pool: String,
    pub amount: String,
}

impl StakeParams {
    pub fn new(stake_pool: &str, amount: &str) -> TxResult<Self> {
        if stake_pool.is_empty() {
            return Err(TxError::MissingField("stakePool"));
        }
        Ok(Self {
            stake_pool: stake_pool.to_string(),
            amount: check_base_units(amount)?,
        })
    }
}

/// Governance proposal submission.
///
/// Either `run_times` is positive, or it is zero and `start`/`end` bound the
/// active window in unix seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeParams {
    pub name: String,
    pub category: String,
    pub description: String,
    pub start: i64,
    pub end: i64,
    pub run_times: i64,
    /// Proposal source code.
    pub source: String,
    pub init_data: String,
    pub only_accepted_tx_actions: Vec<String>,
}

impl ProposeParams {
    pub fn validate(&self) -> TxResult<()> {
        if self.name.is_empty() {
            return Err(TxError::MissingField("name"));
        }
        if self.source.is_empty() {
            return Err(TxError::MissingField("source"));
        }
        for action in &self.only_accepted_tx_actions {
            TxAction::from_str(action)?;
        }
        if self.run_times < 0 {
            return Err(TxError::InvalidParams(format!(
                "runTimes must not be negative, got {}",
                self.run_times
            )));
        }
        if self.run_times == 0 && (self.start == 0 || self.end == 0 || self.start >= self.end) {
            return Err(TxError::InvalidParams(format!(
                "without runTimes, start and end must be set with start < end (start={}, end={})",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

/// Call into an accepted proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParams {
    #[serde(rename = "proposalID")]
    pub proposal_id: String,
    pub function: String,
    pub params: String,
}

impl CallParams {
    pub fn new(proposal_id: &str, function: &str, params: &str) -> TxResult<Self> {
        if proposal_id.is_empty() {
            return Err(TxError::MissingField("proposalID"));
        }
        if function.is_empty() {
            return Err(TxError::MissingField("function"));
        }
        Ok(Self {
            proposal_id: proposal_id.to_string(),
            function: function.to_string(),
            params: params.to_string(),
        })
    }
}

/// Parameters for any client-submittable action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxParams {
    Transfer(TransferParams),
    Stake(StakeParams),
    Unstake(StakeParams),
    Join(RouterState),
    Leave,
    Propose(ProposeParams),
    Call(CallParams),
}

impl TxParams {
    pub fn action(&self) -> TxAction {
        match self {
            TxParams::Transfer(_) => TxAction::Transfer,
            TxParams::Stake(_) => TxAction::Stake,
            TxParams::Unstake(_) => TxAction::Unstake,
            TxParams::Join(_) => TxAction::Join,
            TxParams::Leave => TxAction::Leave,
            TxParams::Propose(_) => TxAction::Propose,
            TxParams::Call(_) => TxAction::Call,
        }
    }

    /// Run the local checks for this action.
    pub fn validate(&self) -> TxResult<()> {
        match self {
            TxParams::Join(state) => validate_router_state(state),
            TxParams::Propose(p) => p.validate(),
            _ => Ok(()),
        }
    }

    /// Encode to the string carried in `Transaction::params`.
    pub fn encode(&self) -> TxResult<String> {
        let encoded = match self {
            TxParams::Transfer(p) => serde_json::to_string(p)?,
            TxParams::Stake(p) | TxParams::Unstake(p) => serde_json::to_string(p)?,
            TxParams::Join(state) => serde_json::to_string(state)?,
            TxParams::Leave => String::new(),
            TxParams::Propose(p) => serde_json::to_string(p)?,
            TxParams::Call(p) => serde_json::to_string(p)?,
        };
        Ok(encoded)
    }
}

pub fn validate_router_state(state: &RouterState) -> TxResult<()> {
    if state.info.len() > MAX_ROUTER_INFO_LEN {
        return Err(TxError::InvalidParams(format!(
            "router info is {} bytes, limit is {}",
            state.info.len(),
            MAX_ROUTER_INFO_LEN
        )));
    }
    Ok(())
}

/// Scale a human-readable amount (e.g. `"1.5"`) to base units.
pub fn parse_amount(amount: &str, decimals: u8) -> TxResult<String> {
    let amount = amount.trim();
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));

    let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty())
        || !digits_only(whole)
        || !digits_only(fraction)
    {
        return Err(TxError::InvalidAmount(amount.to_string()));
    }
    if fraction.len() > decimals as usize {
        return Err(TxError::TooManyDecimals {
            amount: amount.to_string(),
            decimals,
        });
    }

    match parse_units(amount, decimals) {
        Ok(ParseUnits::U256(value)) => Ok(value.to_string()),
        Ok(ParseUnits::I256(_)) | Err(_) => Err(TxError::InvalidAmount(amount.to_string())),
    }
}

/// Accept an amount already expressed in base units.
pub fn check_base_units(amount: &str) -> TxResult<String> {
    if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit()) {
        return Err(TxError::InvalidAmount(amount.to_string()));
    }
    Ok(amount.to_string())
}

/// Validate an account ID; EVM addresses come back EIP-55 checksummed.
pub fn normalize_account_id(id: &str) -> TxResult<String> {
    let hex = id.strip_prefix("0x").unwrap_or(id);
    if hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let address = Address::from_str(hex)
            .map_err(|_| TxError::InvalidAccountId(id.to_string()))?;
        return Ok(address.to_checksum(None));
    }

    if id.len() == AR_ADDRESS_LEN && URL_SAFE_NO_PAD.decode(id).is_ok() {
        return Ok(id.to_string());
    }

    Err(TxError::InvalidAccountId(id.to_string()))
}
