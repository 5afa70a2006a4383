use pegwatch_core::PeggedAsset;

/// `(id, name, symbol, mechanism, circulating at FIXTURE_END)`.
pub const LISTING: &[(&str, &str, &str, &str, f64)] = &[
    ("2", "USD Coin", "USDC", "fiat-backed", 72_000_000_000.0),
    ("1", "Tether", "USDT", "fiat-backed", 187_000_000_000.0),
    ("146", "Ethena USDe", "USDe", "crypto-backed", 5_365_000_000.0),
    ("209", "Sky Dollar", "USDS", "crypto-backed", 8_960_000_000.0),
    ("5", "Dai", "DAI", "crypto-backed", 4_400_000_000.0),
    ("262", "World Liberty Financial USD", "USD1", "fiat-backed", 3_400_000_000.0),
    ("120", "First Digital USD", "FDUSD", "fiat-backed", 1_900_000_000.0),
    ("286", "PayPal USD", "PYUSD", "fiat-backed", 850_000_000.0),
    ("250", "Ripple USD", "RLUSD", "fiat-backed", 493_000_000.0),
    ("7", "TrueUSD", "TUSD", "fiat-backed", 490_000_000.0),
    ("11", "Frax", "FRAX", "algorithmic", 310_000_000.0),
    ("50", "Euro Coin", "EURC", "fiat-backed", 0.0),
];

pub fn all() -> Vec<PeggedAsset> {
    LISTING
        .iter()
        .map(|&(id, name, symbol, mechanism, circulating)| PeggedAsset {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            gecko_id: None,
            peg_type: if symbol == "EURC" { "peggedEUR" } else { "peggedUSD" }.to_string(),
            peg_mechanism: mechanism.to_string(),
            circulating_usd: circulating,
            chains: vec!["Ethereum".to_string()],
        })
        .collect()
}

pub fn by_id(id: &str) -> Option<(&'static str, f64)> {
    LISTING
        .iter()
        .find(|(i, ..)| *i == id)
        .map(|&(_, _, symbol, _, circulating)| (symbol, circulating))
}
