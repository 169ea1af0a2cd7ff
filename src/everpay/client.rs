//! everPay HTTP client.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::EverpayConfig;
use crate::everpay::transaction::EverTransaction;
use crate::everpay::types::{
    EverpayError, EverpayInfo, EverpayResult, EverpaySubmitResponse, FeeResponse,
};

/// HTTP client bound to one everPay endpoint.
#[derive(Debug, Clone)]
pub struct EverpayClient {
    client: reqwest::Client,
    base_url: String,
}

impl EverpayClient {
    pub fn new(config: &EverpayConfig) -> EverpayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /info`.
    pub async fn get_info(&self) -> EverpayResult<EverpayInfo> {
        self.get("/info").await
    }

    /// Transfer fee for a token, in base units.
    pub async fn get_transfer_fee(&self, token_tag: &str) -> EverpayResult<String> {
        let fee: FeeResponse = self.get(&format!("/fee/{}", token_tag)).await?;
        Ok(fee.fee.transfer_fee)
    }

    /// `POST /tx` with a signed transaction.
    pub async fn submit(&self, tx: &EverTransaction) -> EverpayResult<EverpaySubmitResponse> {
        let url = format!("{}/tx", self.base_url);
        let ever_hash = tx.ever_hash();
        tracing::info!(
            url = %url,
            from = %tx.from,
            to = %tx.to,
            ever_hash = %ever_hash,
            "Submitting everPay transaction"
        );

        let resp = self.client.post(&url).json(tx).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        if !resp_ok(status) {
            tracing::warn!(status, body = %body, "everPay rejected transaction");
            return Err(EverpayError::Status { status, body });
        }

        Ok(EverpaySubmitResponse {
            status,
            body,
            ever_hash,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> EverpayResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "GET");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        if !resp_ok(status) {
            return Err(EverpayError::Status { status, body });
        }

        serde_json::from_str(&body).map_err(|e| EverpayError::Decode(format!("{}: {}", path, e)))
    }
}

fn resp_ok(status: u16) -> bool {
    (200..300).contains(&status)
}
