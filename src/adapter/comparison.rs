//! Exchange-rate comparison API adapter.

use chrono::DateTime;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::domain::quote::{Exchange, QuotationInfo, QuotationMap};
use crate::error::Result;
use crate::port::Quotes;

const DEFAULT_BASE_URL: &str = "https://www.usdtwhere.com/wallet-api";

/// Client for the USDT exchange-rate comparison endpoint.
pub struct ComparisonClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ComparisonResponse {
    #[allow(dead_code)]
    code: i64,
    #[allow(dead_code)]
    message: Option<String>,
    data: ComparisonData,
}

#[derive(Debug, Deserialize)]
struct ComparisonData {
    #[serde(default)]
    exchanges: Vec<ComparisonExchange>,
}

#[derive(Debug, Deserialize)]
struct ComparisonExchange {
    name: String,
    buy_rate: Decimal,
    sell_rate: Decimal,
    /// Milliseconds since the epoch.
    update_time: i64,
}

impl ComparisonClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait::async_trait]
impl Quotes for ComparisonClient {
    async fn get_quotations(&self) -> Result<QuotationMap> {
        let url = format!("{}/v1/kgi/exchange-rates/comparison", self.base_url);
        let body = self.client.get(&url).send().await?.text().await?;
        let response: ComparisonResponse = serde_json::from_str(&body)?;

        let mut quotations = QuotationMap::new();
        for entry in response.data.exchanges {
            if entry.name.is_empty() {
                continue;
            }
            let Some(update_time) = DateTime::from_timestamp_millis(entry.update_time) else {
                continue;
            };

            quotations.insert(
                Exchange::from(entry.name),
                QuotationInfo {
                    buy_price: entry.buy_rate,
                    sell_price: entry.sell_rate,
                    update_time,
                },
            );
        }

        debug!(count = quotations.len(), "fetched quotations");
        Ok(quotations)
    }
}
