//! pegwatch-llama
//!
//! Public connector that implements `PegConnector` on top of the public
//! stablecoin API at `stablecoins.llama.fi`. Exposes the asset listing,
//! per-asset circulating supply history and the aggregate supply chart.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
/// Wire shapes of the API.
pub mod dto;

use std::sync::Arc;

use adapter::{LlamaApi, LlamaConfig, RealAdapter};
use async_trait::async_trait;
use pegwatch_core::{
    AssetHistory, PegError, PeggedAsset, SeriesPoint,
    connector::{AssetsProvider, ConnectorKey, HistoryProvider, PegConnector, TotalSupplyProvider},
};

/// Public connector type. Production users construct it with [`LlamaConnector::try_default`].
pub struct LlamaConnector {
    api: Arc<dyn LlamaApi>,
}

impl LlamaConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("pegwatch-llama");

    /// Build against the public API with default HTTP settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn try_default() -> Result<Self, PegError> {
        Self::new(&LlamaConfig::default())
    }

    /// Build with custom HTTP settings, e.g. a different base URL.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unusable base URL and `Connector` if the
    /// HTTP client cannot be constructed.
    pub fn new(cfg: &LlamaConfig) -> Result<Self, PegError> {
        Ok(Self::from_adapter(Arc::new(RealAdapter::new(cfg)?)))
    }

    /// Build from any adapter; tests use this to inject fakes.
    #[must_use]
    pub fn from_adapter(api: Arc<dyn LlamaApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AssetsProvider for LlamaConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pegwatch_llama::pegged_assets", skip(self))
    )]
    async fn pegged_assets(&self) -> Result<Vec<PeggedAsset>, PegError> {
        let list = self.api.stablecoins().await?;
        Ok(list.pegged_assets.into_iter().map(PeggedAsset::from).collect())
    }
}

#[async_trait]
impl HistoryProvider for LlamaConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pegwatch_llama::history", skip(self))
    )]
    async fn history(&self, asset_id: &str) -> Result<AssetHistory, PegError> {
        if asset_id.trim().is_empty() {
            return Err(PegError::InvalidArg("asset id must not be empty".into()));
        }
        let detail = self.api.stablecoin(asset_id).await?;
        Ok(AssetHistory {
            id: asset_id.to_string(),
            points: detail.tokens.iter().map(SeriesPoint::from).collect(),
        })
    }
}

#[async_trait]
impl TotalSupplyProvider for LlamaConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pegwatch_llama::total_supply", skip(self))
    )]
    async fn total_supply(&self) -> Result<Vec<SeriesPoint>, PegError> {
        let chart = self.api.total_chart().await?;
        Ok(chart.iter().map(SeriesPoint::from).collect())
    }
}

impl PegConnector for LlamaConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "DefiLlama"
    }

    fn as_assets_provider(&self) -> Option<&dyn AssetsProvider> {
        Some(self)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self)
    }

    fn as_total_supply_provider(&self) -> Option<&dyn TotalSupplyProvider> {
        Some(self)
    }
}
