#![allow(dead_code)]

// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use pegwatch_core::{PeggedAsset, SeriesPoint};

// ---------- Lightweight fixtures and helpers for tests ----------

pub const DAY: i64 = 86_400;

/// Construct a UTC `DateTime` from components for readability in tests.
pub fn dt(y: i32, m: u32, d: u32) -> chrono::DateTime<chrono::Utc> {
    use chrono::TimeZone;
    chrono::Utc
        .with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .expect("valid date")
}

/// Seconds since epoch for midnight UTC on the given day.
pub fn ts(y: i32, m: u32, d: u32) -> i64 {
    dt(y, m, d).timestamp()
}

/// A USD-pegged asset with the given circulating supply.
pub fn pegged(id: &str, symbol: &str, circulating_usd: f64) -> PeggedAsset {
    PeggedAsset {
        id: id.to_string(),
        name: format!("{symbol} stablecoin"),
        symbol: symbol.to_string(),
        gecko_id: None,
        peg_type: "peggedUSD".to_string(),
        peg_mechanism: "fiat-backed".to_string(),
        circulating_usd,
        chains: vec!["Ethereum".to_string()],
    }
}

/// `(timestamp, value)` pairs as series points.
pub fn points(pairs: &[(i64, f64)]) -> Vec<SeriesPoint> {
    pairs.iter().map(|&(t, v)| SeriesPoint::new(t, v)).collect()
}

/// Assert two floats agree within a relative tolerance.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    let tol = expected.abs().max(1.0) * 1e-9;
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}
