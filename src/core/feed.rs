//! Price feed abstraction

use crate::core::observation::PriceObservation;
use crate::core::table::PriceTable;
use anyhow::Result;
use async_trait::async_trait;

/// Source of raw price observations, fetched as one batch.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_observations(&self) -> Result<Vec<PriceObservation>>;

    /// Fetches the feed and reduces it to a fresh [`PriceTable`].
    async fn fetch_table(&self) -> Result<PriceTable> {
        let observations = self.fetch_observations().await?;
        Ok(PriceTable::build(observations))
    }
}
