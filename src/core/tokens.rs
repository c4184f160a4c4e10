//! Human readable names for token symbols

use std::collections::HashMap;

const KNOWN_TOKENS: &[(&str, &str)] = &[
    ("BLUR", "Blur"),
    ("bNEO", "NEO"),
    ("BUSD", "Binance USD"),
    ("USD", "US Dollar"),
    ("ETH", "Ethereum"),
    ("GMX", "GMX"),
    ("STEVMOS", "Evmos"),
    ("LUNA", "Luna"),
    ("RATOM", "Atom"),
    ("STRD", "Stride"),
    ("EVMOS", "Evmos"),
    ("IBCX", "IBC Index"),
    ("IRIS", "IRISnet"),
    ("ampLUNA", "Amplified Luna"),
    ("KUJI", "Kuji"),
    ("STOSMO", "Staked Osmosis"),
    ("USDC", "USD Coin"),
    ("axlUSDC", "Axelar USD Coin"),
    ("ATOM", "Cosmos"),
    ("STATOM", "Staked Atom"),
    ("OSMO", "Osmosis"),
    ("rSWTH", "Switcheo"),
    ("STLUNA", "Staked Luna"),
    ("LSI", "Liquid Staked Index"),
    ("OKB", "OKB"),
    ("OKT", "OKT"),
    ("SWTH", "Switcheo"),
    ("USC", "USC"),
    ("WBTC", "Wrapped Bitcoin"),
    ("wstETH", "Wrapped stETH"),
    ("YieldUSD", "Yield USD"),
    ("ZIL", "Zilliqa"),
];

/// Resolves display names, preferring configured overrides over the
/// built-in list and falling back to the symbol itself.
#[derive(Debug, Clone)]
pub struct TokenNames {
    names: HashMap<String, String>,
}

impl TokenNames {
    pub fn new(overrides: &HashMap<String, String>) -> Self {
        let mut names: HashMap<String, String> = KNOWN_TOKENS
            .iter()
            .map(|(symbol, name)| (symbol.to_string(), name.to_string()))
            .collect();
        names.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { names }
    }

    /// Symbols are case sensitive: `rSWTH` and `RSWTH` are different tokens.
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.names.get(symbol).map_or(symbol, String::as_str)
    }
}

impl Default for TokenNames {
    fn default() -> Self {
        Self::new(&HashMap::new())
    }
}
