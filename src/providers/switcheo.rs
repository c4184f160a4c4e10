use super::util::with_retry;
use crate::core::feed::PriceFeed;
use crate::core::observation::{PriceObservation, parse_feed};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, instrument};

const PRICES_PATH: &str = "/prices.json";
const RETRIES: usize = 3;
const RETRY_DELAY_MS: u64 = 500;

/// Reads the Switcheo `prices.json` feed: a flat JSON array of
/// `{ currency, date, price }` records, one per price update.
pub struct SwitcheoPriceFeed {
    base_url: String,
    retries: usize,
    retry_delay_ms: u64,
}

impl SwitcheoPriceFeed {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            retries: RETRIES,
            retry_delay_ms: RETRY_DELAY_MS,
        }
    }

    pub fn with_retries(mut self, retries: usize, retry_delay_ms: u64) -> Self {
        self.retries = retries;
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    async fn request(client: &reqwest::Client, url: &str) -> Result<String> {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} for price feed", response.status()));
        }

        response
            .text()
            .await
            .context("Failed to read price feed response")
    }
}

#[async_trait]
impl PriceFeed for SwitcheoPriceFeed {
    #[instrument(name = "SwitcheoFeedFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_observations(&self) -> Result<Vec<PriceObservation>> {
        let url = format!("{}{}", self.base_url, PRICES_PATH);
        debug!("Requesting price feed from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("swaprate/0.1")
            .build()?;
        let text = with_retry(
            || Self::request(&client, &url),
            self.retries,
            self.retry_delay_ms,
        )
        .await
        .context("Price feed request failed")?;

        let entries: Vec<Value> = match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(e) => {
                error!(error = ?e, "Price feed is not a JSON array");
                return Err(e).context("Failed to parse price feed response");
            }
        };

        Ok(parse_feed(entries))
    }
}
