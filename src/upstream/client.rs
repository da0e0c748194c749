use reqwest::Client;
use thiserror::Error;

use super::types::{RawChartData, RawWallet};

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Thin typed client for the backend wallet API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current wallet snapshots for a coin, optionally filtered
    /// by chain.
    pub async fn get_wallet_stats(
        &self,
        coin_id: i64,
        chain: Option<&str>,
    ) -> Result<Vec<RawWallet>, UpstreamError> {
        let url = format!("{}/wallets/stats", self.base_url);
        let mut req = self
            .http
            .get(&url)
            .query(&[("coin_id", coin_id.to_string())]);
        if let Some(chain) = chain {
            req = req.query(&[("chain", chain)]);
        }

        let resp = req.send().await?.error_for_status()?;
        let wallets: Vec<RawWallet> = resp.json().await?;
        Ok(wallets)
    }

    /// Fetch raw per-wallet balance histories for a coin, keyed by chain.
    pub async fn get_chart_data(&self, coin_id: i64) -> Result<RawChartData, UpstreamError> {
        let url = format!("{}/wallets/chart-data", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("coin_id", coin_id.to_string())])
            .send()
            .await?
            .error_for_status()?;

        let chart_data: RawChartData = resp.json().await?;
        Ok(chart_data)
    }
}
