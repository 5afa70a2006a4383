//! Mock connector for CI-safe examples and orchestrator tests.
//!
//! Serves a fixed listing of stablecoins and deterministic daily histories.
//! Two asset ids are special: `"FAIL"` always errors and `"TIMEOUT"` sleeps
//! before answering so the orchestrator's provider timeout can trip.
use std::time::Duration;

use async_trait::async_trait;
use pegwatch_core::connector::{
    AssetsProvider, HistoryProvider, PegConnector, TotalSupplyProvider,
};
use pegwatch_core::{AssetHistory, PegError, PeggedAsset, SeriesPoint};

mod fixtures;

pub use fixtures::{FIXTURE_DAYS, FIXTURE_END};

/// Mock connector. Provides deterministic data from static fixtures.
pub struct MockConnector {
    latency: Duration,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name reported in errors.
    pub const NAME: &'static str = "pegwatch-mock";

    /// Create a connector with the default simulated latency for `"TIMEOUT"`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Duration::from_millis(200),
        }
    }

    /// Override the delay applied to the `"TIMEOUT"` id.
    #[must_use]
    pub const fn with_timeout_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn maybe_fail_or_timeout(&self, id: &str, capability: &'static str) -> Result<(), PegError> {
        match id {
            "FAIL" => Err(PegError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(self.latency).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl AssetsProvider for MockConnector {
    async fn pegged_assets(&self) -> Result<Vec<PeggedAsset>, PegError> {
        Ok(fixtures::assets::all())
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(&self, asset_id: &str) -> Result<AssetHistory, PegError> {
        self.maybe_fail_or_timeout(asset_id, "history").await?;
        fixtures::history::by_id(asset_id)
            .ok_or_else(|| PegError::not_found(format!("history for {asset_id}")))
    }
}

#[async_trait]
impl TotalSupplyProvider for MockConnector {
    async fn total_supply(&self) -> Result<Vec<SeriesPoint>, PegError> {
        Ok(fixtures::history::total())
    }
}

impl PegConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_assets_provider(&self) -> Option<&dyn AssetsProvider> {
        Some(self as &dyn AssetsProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_total_supply_provider(&self) -> Option<&dyn TotalSupplyProvider> {
        Some(self as &dyn TotalSupplyProvider)
    }
}
