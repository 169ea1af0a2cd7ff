//! Pre-flight checks for genesis parameters.
//!
//! A genesis transfer cannot be taken back once everPay accepts it, so the
//! payload is checked locally and every problem is reported at once.

use alloy::primitives::U256;

use crate::genesis::types::{GenesisError, GenesisIssue, GenesisParams, GenesisResult};

/// Validate genesis parameters, collecting all issues.
pub fn validate(params: &GenesisParams) -> GenesisResult<()> {
    let mut issues = Vec::new();
    let mut issue = |field: String, message: &str| {
        issues.push(GenesisIssue {
            field,
            message: message.to_string(),
        })
    };

    for (field, value) in [
        ("dapp", &params.dapp),
        ("chainID", &params.chain_id),
        ("govern", &params.govern),
        ("feeRecipient", &params.fee_recipient),
        ("tokenSymbol", &params.token_symbol),
    ] {
        if value.is_empty() {
            issue(field.to_string(), "must not be empty");
        }
    }

    if params.token_decimals <= 0 {
        issue("tokenDecimals".to_string(), "must be greater than 0");
    }

    let supply = match parse_integer(&params.token_total_supply) {
        Some(v) if !v.is_zero() => Some(v),
        _ => {
            issue("tokenTotalSupply".to_string(), "must be a positive integer");
            None
        }
    };

    let mut allocated = U256::ZERO;
    let mut overflow = false;
    let mut add = |amount: U256| match allocated.checked_add(amount) {
        Some(sum) => allocated = sum,
        None => overflow = true,
    };

    for (pool, amount) in &params.token_balance {
        match parse_integer(amount) {
            Some(v) => add(v),
            None => issue(
                format!("tokenBalance[{}]", pool),
                "must be a non-negative integer",
            ),
        }
    }

    for (account, stakes) in &params.token_stake {
        for (pool, amount) in stakes {
            match parse_integer(amount) {
                Some(v) => add(v),
                None => issue(
                    format!("tokenStake[{}][{}]", account, pool),
                    "must be a non-negative integer",
                ),
            }
            if !params.stake_pools.contains(pool) {
                issue(
                    format!("tokenStake[{}][{}]", account, pool),
                    "stake pool is not listed in stakePools",
                );
            }
        }
    }

    if let Some(supply) = supply {
        if overflow || allocated > supply {
            issue(
                "tokenTotalSupply".to_string(),
                "balances plus stakes exceed total supply",
            );
        }
    }

    for router in &params.routers {
        let Some(state) = params.router_states.get(router) else {
            issue(format!("routerStates[{}]", router), "router has no state");
            continue;
        };
        if state.router != *router {
            issue(
                format!("routerStates[{}].router", router),
                "does not match its key",
            );
        }
        for (id, pool) in &state.pools {
            if *id != pool.id() {
                issue(
                    format!("routerStates[{}].pools[{}]", router, id),
                    "key does not match computed pool ID",
                );
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(GenesisError::Invalid(issues))
    }
}

/// Parse a decimal integer with no sign, exponent or fraction.
fn parse_integer(s: &str) -> Option<U256> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(s, 10).ok()
}
