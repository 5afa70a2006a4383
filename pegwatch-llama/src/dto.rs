//! Wire shapes of the stablecoin API and their conversion into pegwatch types.
//!
//! The API is loose about types: `date` arrives as a number on some endpoints
//! and a numeric string on others, and `circulating` may omit `peggedUSD` for
//! assets pegged to other currencies. Missing amounts decode as 0.

use serde::{Deserialize, Deserializer};

use pegwatch_types::{PeggedAsset, SeriesPoint};

/// Circulating amount keyed by peg currency.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Circulating {
    /// USD-pegged amount.
    #[serde(rename = "peggedUSD", default)]
    pub pegged_usd: Option<f64>,
}

impl Circulating {
    fn usd(c: Option<&Self>) -> f64 {
        c.and_then(|c| c.pegged_usd).unwrap_or(0.0)
    }
}

/// `GET /stablecoins` response.
#[derive(Debug, Clone, Deserialize)]
pub struct StablecoinList {
    /// Every listed asset.
    #[serde(rename = "peggedAssets", default)]
    pub pegged_assets: Vec<PeggedAssetDto>,
}

/// One entry of the asset listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PeggedAssetDto {
    /// Provider id; numeric in practice but kept opaque.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Asset name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// `CoinGecko` id.
    #[serde(default, alias = "geckoId")]
    pub gecko_id: Option<String>,
    /// Peg target.
    #[serde(rename = "pegType", default)]
    pub peg_type: Option<String>,
    /// Peg mechanism.
    #[serde(rename = "pegMechanism", default)]
    pub peg_mechanism: Option<String>,
    /// Current circulating supply.
    #[serde(default)]
    pub circulating: Option<Circulating>,
    /// Chains the asset circulates on.
    #[serde(default)]
    pub chains: Vec<String>,
}

impl From<PeggedAssetDto> for PeggedAsset {
    fn from(d: PeggedAssetDto) -> Self {
        Self {
            circulating_usd: Circulating::usd(d.circulating.as_ref()),
            id: d.id,
            name: d.name,
            symbol: d.symbol,
            gecko_id: d.gecko_id,
            peg_type: d.peg_type.unwrap_or_default(),
            peg_mechanism: d.peg_mechanism.unwrap_or_default(),
            chains: d.chains,
        }
    }
}

/// `GET /stablecoin/{id}` response; only the supply history is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct StablecoinDetail {
    /// Daily circulating supply.
    #[serde(default)]
    pub tokens: Vec<TokenPoint>,
}

/// One day of an asset's circulating supply.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPoint {
    /// Seconds since the UNIX epoch.
    #[serde(deserialize_with = "flexible_timestamp")]
    pub date: i64,
    /// Circulating amount at `date`.
    #[serde(default)]
    pub circulating: Option<Circulating>,
}

impl From<&TokenPoint> for SeriesPoint {
    fn from(p: &TokenPoint) -> Self {
        Self::new(p.date, Circulating::usd(p.circulating.as_ref()))
    }
}

/// One day of the aggregate chart (`GET /stablecoincharts/all`).
#[derive(Debug, Clone, Deserialize)]
pub struct ChartPoint {
    /// Seconds since the UNIX epoch.
    #[serde(deserialize_with = "flexible_timestamp")]
    pub date: i64,
    /// Total circulating amount across all assets.
    #[serde(rename = "totalCirculatingUSD", default)]
    pub total_circulating_usd: Option<Circulating>,
}

impl From<&ChartPoint> for SeriesPoint {
    fn from(p: &ChartPoint) -> Self {
        Self::new(p.date, Circulating::usd(p.total_circulating_usd.as_ref()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrString {
    Int(i64),
    Float(f64),
    Str(String),
}

fn flexible_timestamp<'de, D>(de: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumOrString::deserialize(de)? {
        NumOrString::Int(v) => Ok(v),
        #[allow(clippy::cast_possible_truncation)]
        NumOrString::Float(v) if v.is_finite() => Ok(v as i64),
        NumOrString::Float(v) => Err(serde::de::Error::custom(format!("invalid date {v}"))),
        NumOrString::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid date {s:?}: {e}"))),
    }
}

fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumOrString::deserialize(de)? {
        NumOrString::Int(v) => v.to_string(),
        NumOrString::Float(v) => v.to_string(),
        NumOrString::Str(s) => s,
    })
}
