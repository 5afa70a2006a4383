//! Series, asset and merged-row types.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::Color;

/// One observation of an asset's circulating supply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Observation time, seconds since the UNIX epoch.
    pub timestamp: i64,
    /// Observed value (USD, non-negative).
    pub value: f64,
}

impl SeriesPoint {
    /// Construct a point.
    #[must_use]
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Display metadata for one tracked asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMeta {
    /// Provider identifier used to fetch history.
    pub id: String,
    /// Display key; unique within a merge.
    pub symbol: String,
    /// Human-readable name.
    pub name: String,
    /// Opaque display color token.
    pub color: Color,
    /// Circulating supply reported by the asset listing.
    pub current_supply: f64,
}

/// A pegged asset as listed by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeggedAsset {
    /// Provider identifier.
    pub id: String,
    /// Asset name, e.g. "Tether".
    pub name: String,
    /// Ticker symbol, e.g. "USDT".
    pub symbol: String,
    /// `CoinGecko` identifier, when the provider knows it.
    pub gecko_id: Option<String>,
    /// Peg target, e.g. "peggedUSD".
    pub peg_type: String,
    /// Peg mechanism, e.g. "fiat-backed".
    pub peg_mechanism: String,
    /// Current circulating supply in USD.
    pub circulating_usd: f64,
    /// Chains the asset circulates on.
    pub chains: Vec<String>,
}

/// Circulating supply history of one asset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetHistory {
    /// Provider identifier the history belongs to.
    pub id: String,
    /// Observations in provider order (not necessarily sorted).
    pub points: Vec<SeriesPoint>,
}

/// One row of the aligned supply table.
///
/// Serializes in the chart shape `{"date": ts, "USDT": v, ...}`. Symbols share
/// that object with the timestamp, so [`MergedRow::DATE_KEY`] is not a valid
/// symbol; the orchestrator never tracks an asset under it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MergedRow {
    /// Merge key, seconds since the UNIX epoch.
    #[serde(rename = "date")]
    pub timestamp: i64,
    /// Value per symbol in the active set.
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl MergedRow {
    /// Key the timestamp serializes under.
    pub const DATE_KEY: &'static str = "date";

    /// Value for `symbol`, 0 when the symbol has no entry.
    #[must_use]
    pub fn get(&self, symbol: &str) -> f64 {
        self.values.get(symbol).copied().unwrap_or(0.0)
    }

    /// Sum of every value in the row.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }
}
