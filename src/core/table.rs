//! Canonical latest-price table built from a raw price feed

use crate::core::observation::PriceObservation;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// The price selected as authoritative for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub price: f64,
    #[serde(rename = "date")]
    pub observed_at: DateTime<Utc>,
}

/// Immutable snapshot holding one priced entry per symbol.
///
/// Built once per feed fetch with [`PriceTable::build`]; a newer fetch
/// produces a new table rather than updating an existing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: HashMap<String, PricePoint>,
}

impl PriceTable {
    /// Reduces observations to the latest one per symbol, then drops symbols
    /// whose latest observation carries no usable price.
    ///
    /// Input order does not matter except on exact timestamp ties, where the
    /// first observation encountered is kept.
    pub fn build<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = PriceObservation>,
    {
        let latest = observations.into_iter().fold(
            HashMap::<String, PriceObservation>::new(),
            |mut acc, observation| {
                match acc.entry(observation.symbol.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(observation);
                    }
                    Entry::Occupied(mut slot) => {
                        if observation.observed_at > slot.get().observed_at {
                            slot.insert(observation);
                        }
                    }
                }
                acc
            },
        );

        let prices: HashMap<String, PricePoint> = latest
            .into_iter()
            .filter_map(|(symbol, observation)| match observation.price {
                Some(price) if price.is_finite() => Some((
                    symbol,
                    PricePoint {
                        price,
                        observed_at: observation.observed_at,
                    },
                )),
                _ => {
                    debug!("Dropping {} with no usable latest price", symbol);
                    None
                }
            })
            .collect();

        debug!("Built price table with {} symbols", prices.len());
        Self { prices }
    }

    pub fn lookup(&self, symbol: &str) -> Option<f64> {
        self.prices.get(symbol).map(|point| point.price)
    }

    pub fn get(&self, symbol: &str) -> Option<&PricePoint> {
        self.prices.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.prices.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Symbols in ascending order, suitable for a selectable list.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.prices.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Entries sorted by symbol.
    pub fn entries(&self) -> Vec<(&str, &PricePoint)> {
        let mut entries: Vec<(&str, &PricePoint)> = self
            .prices
            .iter()
            .map(|(symbol, point)| (symbol.as_str(), point))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<PriceObservation> for PriceTable {
    fn from_iter<I: IntoIterator<Item = PriceObservation>>(iter: I) -> Self {
        Self::build(iter)
    }
}
