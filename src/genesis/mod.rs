//! Halo genesis: the initial chain state and its one-time submission.
//!
//! # Data Flow
//! ```text
//! mainnet.json (embedded) or --params FILE
//!     → GenesisParams
//!     → validation.rs (all issues at once)
//!     → EverTransaction { transfer 0 <token> → halo address, data: compact JSON }
//!     → sign → everPay POST /tx
//! ```
//!
//! The halo node treats the first transfer to its address carrying this
//! payload as the genesis of the chain.

pub mod types;
pub mod validation;

use std::fs;
use std::path::Path;

pub use types::{
    EverToken, GenesisError, GenesisIssue, GenesisParams, GenesisResult, Pool, RouterState,
};
pub use validation::validate;

use crate::everpay::{EverTransaction, EverpayClient, EverpayError, EverpaySubmitResponse};
use crate::signer::Signer;
use crate::transaction::NonceGenerator;

/// Genesis transfers move nothing; the payload is the point.
pub const GENESIS_AMOUNT: &str = "0";

/// Load parameters from a JSON file, or the embedded mainnet table.
pub fn load_params(path: Option<&Path>) -> GenesisResult<GenesisParams> {
    let Some(path) = path else {
        tracing::info!("Using embedded mainnet genesis params");
        return GenesisParams::mainnet();
    };

    let json = fs::read_to_string(path).map_err(|source| GenesisError::Read {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Loaded genesis params");
    GenesisParams::from_json(&json)
}

/// Validate the params and build the signed everPay genesis transfer.
pub async fn build_genesis_tx(
    everpay: &EverpayClient,
    signer: &Signer,
    params: &GenesisParams,
    token_tag: &str,
    halo_address: &str,
) -> GenesisResult<EverTransaction> {
    validate(params)?;
    let data = params.to_data()?;

    let info = everpay.get_info().await?;
    let token = info
        .find_token(token_tag)
        .ok_or_else(|| EverpayError::TokenNotFound(token_tag.to_string()))?;
    let fee = everpay.get_transfer_fee(&token.tag).await?;

    let mut tx = EverTransaction::transfer(
        token,
        signer.address(),
        halo_address,
        GENESIS_AMOUNT,
        fee,
        info.fee_recipient.clone(),
        NonceGenerator::new().next(),
        data,
    );
    tx.sign(signer).await?;

    tracing::info!(
        token = %token.tag,
        from = %tx.from,
        to = %tx.to,
        fee = %tx.fee,
        ever_hash = %tx.ever_hash(),
        data_len = tx.data.len(),
        "Genesis transaction signed"
    );
    Ok(tx)
}

/// Build, sign and post the genesis transfer.
pub async fn submit_genesis(
    everpay: &EverpayClient,
    signer: &Signer,
    params: &GenesisParams,
    token_tag: &str,
    halo_address: &str,
) -> GenesisResult<EverpaySubmitResponse> {
    let tx = build_genesis_tx(everpay, signer, params, token_tag, halo_address).await?;
    Ok(everpay.submit(&tx).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_embedded() {
        let params = load_params(None).unwrap();
        assert_eq!(params.token_symbol, GenesisParams::mainnet().unwrap().token_symbol);
    }

    #[test]
    fn test_load_from_file() {
        let mut params = GenesisParams::mainnet().unwrap();
        params.chain_id = "5".into();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(params.to_data().unwrap().as_bytes()).unwrap();

        let loaded = load_params(Some(file.path())).unwrap();
        assert_eq!(loaded.chain_id, "5");
    }

    #[test]
    fn test_missing_file() {
        let result = load_params(Some(Path::new("/nonexistent/genesis.json")));
        assert!(matches!(result, Err(GenesisError::Read { .. })));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"dapp\": ").unwrap();
        assert!(matches!(
            load_params(Some(file.path())),
            Err(GenesisError::Parse(_))
        ));
    }
}
