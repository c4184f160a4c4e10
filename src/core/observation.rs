//! Raw price observations and the feed record shape they are parsed from

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One entry of the price feed, exactly as it arrives on the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedRecord {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A single price reading for a symbol at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceObservation {
    pub symbol: String,
    pub price: Option<f64>,
    pub observed_at: DateTime<Utc>,
}

impl PriceObservation {
    pub fn new(symbol: &str, price: Option<f64>, observed_at: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.to_string(),
            price,
            observed_at,
        }
    }

    /// Converts a feed record, returning `None` when the symbol or timestamp
    /// is missing or unusable.
    pub fn from_record(record: &FeedRecord) -> Option<Self> {
        let symbol = record.currency.as_deref().map(str::trim)?;
        if symbol.is_empty() {
            return None;
        }
        let observed_at = parse_timestamp(record.date.as_deref()?)?;
        Some(Self::new(symbol, record.price, observed_at))
    }
}

/// Parses the timestamp shapes seen in price feeds: RFC 3339, a zone-less
/// date-time (read as UTC) or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Turns a decoded feed array into observations. Entries that are not
/// well-formed records are skipped.
pub fn parse_feed(entries: Vec<Value>) -> Vec<PriceObservation> {
    let total = entries.len();
    let observations: Vec<PriceObservation> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<FeedRecord>(entry) {
            Ok(record) => {
                let observation = PriceObservation::from_record(&record);
                if observation.is_none() {
                    debug!(?record, "Skipping feed record without symbol or timestamp");
                }
                observation
            }
            Err(e) => {
                debug!("Skipping malformed feed record: {}", e);
                None
            }
        })
        .collect();

    debug!(
        "Parsed {} of {} feed records into observations",
        observations.len(),
        total
    );
    observations
}
