//! Router HTTP client.
//!
//! # Responsibilities
//! - Fetch chain info used to assemble transactions
//! - Submit signed transactions
//! - Read-only queries for the CLI (balance, tx, proposal, token, txs)
//!
//! Responses are surfaced as-is; the router is the only judge of validity.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::RouterConfig;
use crate::router::types::{
    InfoResponse, RouterError, RouterResult, SubmitBody, SubmitResponse,
};
use crate::transaction::Transaction;

/// HTTP client bound to one router.
#[derive(Clone)]
pub struct RouterClient {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl RouterClient {
    /// Create a client from configuration.
    pub fn new(config: &RouterConfig) -> RouterResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /info`.
    pub async fn get_info(&self) -> RouterResult<InfoResponse> {
        self.get_json("/info").await
    }

    /// `POST /submit` with the signed transaction.
    pub async fn submit(&self, tx: &Transaction) -> RouterResult<SubmitResponse> {
        let url = self.endpoint("/submit");
        tracing::info!(
            url = %url,
            action = %tx.action,
            from = %tx.from,
            nonce = %tx.nonce,
            "Submitting transaction"
        );

        let resp = self.client.post(&url).json(tx).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %body, "Router rejected transaction");
            return Err(RouterError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let ever_hash = serde_json::from_str::<SubmitBody>(&body)
            .ok()
            .and_then(|b| b.ever_hash);
        tracing::info!(
            status = status.as_u16(),
            ever_hash = ever_hash.as_deref().unwrap_or(""),
            "Transaction accepted"
        );

        Ok(SubmitResponse {
            status: status.as_u16(),
            body,
            ever_hash,
        })
    }

    /// `GET /balance/{account}`.
    pub async fn get_balance(&self, account: &str) -> RouterResult<Value> {
        self.get_json(&format!("/balance/{}", account)).await
    }

    /// `GET /tx/{hash}`.
    pub async fn get_tx(&self, hash: &str) -> RouterResult<Value> {
        self.get_json(&format!("/tx/{}", hash)).await
    }

    /// `GET /proposal/{id}`; `detail` includes executed txs.
    pub async fn get_proposal(&self, id: &str, detail: bool) -> RouterResult<Value> {
        self.get_json(&format!("/proposal/{}?detail={}", id, detail)).await
    }

    /// `GET /token`.
    pub async fn get_token(&self) -> RouterResult<Value> {
        self.get_json("/token").await
    }

    /// `GET /txs`.
    pub async fn get_txs(&self) -> RouterResult<Value> {
        self.get_json("/txs").await
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RouterResult<T> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, timeout_secs = self.timeout_secs, "GET");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(RouterError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| RouterError::Decode(format!("{}: {}", path, e)))
    }
}

impl std::fmt::Debug for RouterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(url: &str) -> RouterConfig {
        RouterConfig {
            url: url.to_string(),
            timeout_secs: 2,
        }
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = RouterClient::new(&test_config("http://127.0.0.1:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
        assert_eq!(client.endpoint("/info"), "http://127.0.0.1:8080/info");
    }

    #[test]
    fn test_path_prefix_kept() {
        let client = RouterClient::new(&test_config("https://node.example.com/halo")).unwrap();
        assert_eq!(client.endpoint("/submit"), "https://node.example.com/halo/submit");
    }

    #[tokio::test]
    async fn test_unreachable_router() {
        // Port 9 (discard) is not expected to have an HTTP server.
        let client = RouterClient::new(&test_config("http://127.0.0.1:9")).unwrap();
        let result = client.get_info().await;
        assert!(matches!(result, Err(RouterError::Http(_))));
    }
}
