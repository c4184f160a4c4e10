//! Cross-rate conversion between two priced symbols
//!
//! Feed prices are the value of one unit in a common reference currency, so
//! `amount` of `source` is worth `amount * price(source) / price(target)` units
//! of `target`. Every input problem degrades to [`ConversionResult::Unavailable`].

use crate::core::table::PriceTable;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

/// Decimal places kept in a converted amount.
pub const OUTPUT_DECIMAL_PLACES: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionResult {
    Available(f64),
    Unavailable,
}

impl ConversionResult {
    pub fn is_available(&self) -> bool {
        matches!(self, ConversionResult::Available(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            ConversionResult::Available(value) => Some(*value),
            ConversionResult::Unavailable => None,
        }
    }
}

impl Serialize for ConversionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConversionResult::Available(value) => {
                let mut state = serializer.serialize_struct("ConversionResult", 2)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("value", value)?;
                state.end()
            }
            ConversionResult::Unavailable => {
                let mut state = serializer.serialize_struct("ConversionResult", 1)?;
                state.serialize_field("ok", &false)?;
                state.end()
            }
        }
    }
}

/// A single user computation: the amount is kept as the text the user typed.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source: String,
    pub target: String,
    pub amount: String,
}

impl ConversionRequest {
    pub fn new(source: &str, target: &str, amount: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            amount: amount.to_string(),
        }
    }

    pub fn convert(&self, table: &PriceTable) -> ConversionResult {
        convert(&self.source, &self.target, &self.amount, table)
    }
}

/// Parses a user-entered amount. Empty, non-numeric, non-finite and negative
/// input yields `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let amount: f64 = text.trim().parse().ok()?;
    if amount.is_finite() && amount >= 0.0 {
        Some(amount)
    } else {
        None
    }
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    match Decimal::from_f64(value) {
        // Through text so the result is the f64 nearest to the rounded decimal.
        Some(d) => d
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
            .parse()
            .unwrap_or(value),
        // Decimal only rejects magnitudes far beyond any fractional precision.
        None if value.abs() < 1.0 => 0.0,
        None => value,
    }
}

/// Converts `amount` (user text) of `source` into `target`.
pub fn convert(source: &str, target: &str, amount: &str, table: &PriceTable) -> ConversionResult {
    match parse_amount(amount) {
        Some(amount) => convert_amount(source, target, amount, table),
        None => {
            debug!("Amount {:?} is not a usable number", amount);
            ConversionResult::Unavailable
        }
    }
}

/// Converts an already parsed amount of `source` into `target`.
pub fn convert_amount(
    source: &str,
    target: &str,
    amount: f64,
    table: &PriceTable,
) -> ConversionResult {
    let (source, target) = (source.trim(), target.trim());
    if source.is_empty() || target.is_empty() {
        return ConversionResult::Unavailable;
    }
    if !amount.is_finite() || amount < 0.0 {
        return ConversionResult::Unavailable;
    }

    let (Some(source_price), Some(target_price)) = (table.lookup(source), table.lookup(target))
    else {
        debug!("No price for {} or {}", source, target);
        return ConversionResult::Unavailable;
    };
    if target_price == 0.0 {
        debug!("Target {} is priced at zero", target);
        return ConversionResult::Unavailable;
    }

    let output = amount * source_price / target_price;
    if !output.is_finite() {
        debug!("Conversion {} -> {} produced {}", source, target, output);
        return ConversionResult::Unavailable;
    }

    let rounded = round_to_places(output, OUTPUT_DECIMAL_PLACES);
    debug!(
        "Converted {amount} {source} at {source_price} to {rounded} {target} at {target_price}"
    );
    ConversionResult::Available(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::observation::{PriceObservation, parse_timestamp};

    fn table(prices: &[(&str, f64)]) -> PriceTable {
        let observed_at = parse_timestamp("2024-01-01").unwrap();
        PriceTable::build(
            prices
                .iter()
                .map(|(symbol, price)| PriceObservation::new(symbol, Some(*price), observed_at)),
        )
    }

    #[test]
    fn test_convert_cross_rate() {
        let table = table(&[("USDC", 1.0), ("ETH", 3200.0)]);
        assert_eq!(
            convert("ETH", "USDC", "1", &table),
            ConversionResult::Available(3200.0)
        );
        assert_eq!(
            convert("USDC", "ETH", "1600", &table),
            ConversionResult::Available(0.5)
        );
    }

    #[test]
    fn test_convert_missing_symbol_is_unavailable() {
        let table = table(&[("USDC", 1.0)]);
        assert_eq!(
            convert("ETH", "USDC", "1", &table),
            ConversionResult::Unavailable
        );
        assert_eq!(
            convert("USDC", "ETH", "1", &table),
            ConversionResult::Unavailable
        );
    }

    #[test]
    fn test_convert_non_numeric_amount_is_unavailable() {
        let table = table(&[("USDC", 1.0), ("ETH", 3200.0)]);
        for amount in ["abc", "", "   ", "1,5", "NaN", "inf", "-1"] {
            assert_eq!(
                convert("ETH", "USDC", amount, &table),
                ConversionResult::Unavailable,
                "amount {amount:?}"
            );
        }
        assert_eq!(
            convert("ETH", "USDC", " 2 ", &table),
            ConversionResult::Available(6400.0)
        );
    }

    #[test]
    fn test_convert_zero_target_price_is_unavailable() {
        let table = table(&[("USDC", 1.0), ("DEAD", 0.0)]);
        assert_eq!(
            convert("USDC", "DEAD", "10", &table),
            ConversionResult::Unavailable
        );
        // A worthless source is still a valid conversion.
        assert_eq!(
            convert("DEAD", "USDC", "10", &table),
            ConversionResult::Available(0.0)
        );
    }

    #[test]
    fn test_convert_non_finite_output_is_unavailable() {
        let table = table(&[("HUGE", f64::MAX), ("TINY", f64::MIN_POSITIVE)]);
        assert_eq!(
            convert("HUGE", "TINY", "10", &table),
            ConversionResult::Unavailable
        );
    }

    #[test]
    fn test_convert_empty_symbols_are_unavailable() {
        let table = table(&[("USDC", 1.0)]);
        assert_eq!(
            convert("", "USDC", "1", &table),
            ConversionResult::Unavailable
        );
        assert_eq!(
            convert("USDC", " ", "1", &table),
            ConversionResult::Unavailable
        );
    }

    #[test]
    fn test_convert_to_self_is_identity() {
        let table = table(&[("ATOM", 7.123456789), ("USDC", 1.0)]);
        assert_eq!(
            convert("ATOM", "ATOM", "12.3456", &table),
            ConversionResult::Available(12.3456)
        );
        assert_eq!(
            convert("ATOM", "ATOM", "0", &table),
            ConversionResult::Available(0.0)
        );
    }

    #[test]
    fn test_convert_is_repeatable() {
        let table = table(&[("ATOM", 7.123456789), ("OSMO", 0.381)]);
        let request = ConversionRequest::new("ATOM", "OSMO", "3.3");
        let first = request.convert(&table);
        assert!(first.is_available());
        assert_eq!(first, request.convert(&table));
    }

    #[test]
    fn test_output_rounded_to_four_places() {
        let table = table(&[("USDC", 1.0), ("ETH", 3.0)]);
        assert_eq!(
            convert("USDC", "ETH", "1", &table),
            ConversionResult::Available(0.3333)
        );
        assert_eq!(
            convert("USDC", "ETH", "2", &table),
            ConversionResult::Available(0.6667)
        );
    }

    #[test]
    fn test_round_to_places_half_away_from_zero() {
        assert_eq!(round_to_places(0.00005, 4), 0.0001);
        assert_eq!(round_to_places(-0.00005, 4), -0.0001);
        assert_eq!(round_to_places(1.23444, 4), 1.2344);
        assert_eq!(round_to_places(3200.0, 4), 3200.0);
        assert_eq!(round_to_places(1e300, 4), 1e300);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1"), Some(1.0));
        assert_eq!(parse_amount("0.25"), Some(0.25));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("-0.5"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_result_serialization() {
        assert_eq!(
            serde_json::to_string(&ConversionResult::Available(3200.0)).unwrap(),
            r#"{"ok":true,"value":3200.0}"#
        );
        assert_eq!(
            serde_json::to_string(&ConversionResult::Unavailable).unwrap(),
            r#"{"ok":false}"#
        );
    }
}
