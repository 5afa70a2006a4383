#![allow(dead_code)]
#![allow(clippy::type_complexity)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_truncation)]

use std::sync::Arc;

use async_trait::async_trait;
use pegwatch_core::connector::{AssetsProvider, HistoryProvider, TotalSupplyProvider};
use pegwatch_core::{AssetHistory, PegConnector, PegError, PeggedAsset, SeriesPoint};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
/// A capability is advertised only when its closure is set.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,

    pub assets_fn: Option<Arc<dyn Fn() -> Result<Vec<PeggedAsset>, PegError> + Send + Sync>>,
    pub history_fn: Option<Arc<dyn Fn(&str) -> Result<AssetHistory, PegError> + Send + Sync>>,
    pub total_supply_fn: Option<Arc<dyn Fn() -> Result<Vec<SeriesPoint>, PegError> + Send + Sync>>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    async fn pause(&self) {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl AssetsProvider for MockConnector {
    async fn pegged_assets(&self) -> Result<Vec<PeggedAsset>, PegError> {
        self.pause().await;
        self.assets_fn
            .as_ref()
            .map_or_else(|| Err(PegError::unsupported("assets")), |f| (f)())
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(&self, asset_id: &str) -> Result<AssetHistory, PegError> {
        self.pause().await;
        self.history_fn
            .as_ref()
            .map_or_else(|| Err(PegError::unsupported("history")), |f| (f)(asset_id))
    }
}

#[async_trait]
impl TotalSupplyProvider for MockConnector {
    async fn total_supply(&self) -> Result<Vec<SeriesPoint>, PegError> {
        self.pause().await;
        self.total_supply_fn
            .as_ref()
            .map_or_else(|| Err(PegError::unsupported("total-supply")), |f| (f)())
    }
}

impl PegConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_assets_provider(&self) -> Option<&dyn AssetsProvider> {
        if self.assets_fn.is_some() {
            Some(self as &dyn AssetsProvider)
        } else {
            None
        }
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        if self.history_fn.is_some() {
            Some(self as &dyn HistoryProvider)
        } else {
            None
        }
    }

    fn as_total_supply_provider(&self) -> Option<&dyn TotalSupplyProvider> {
        if self.total_supply_fn.is_some() {
            Some(self as &dyn TotalSupplyProvider)
        } else {
            None
        }
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    delay_ms: u64,
    assets_fn: Option<Arc<dyn Fn() -> Result<Vec<PeggedAsset>, PegError> + Send + Sync>>,
    history_fn: Option<Arc<dyn Fn(&str) -> Result<AssetHistory, PegError> + Send + Sync>>,
    total_supply_fn: Option<Arc<dyn Fn() -> Result<Vec<SeriesPoint>, PegError> + Send + Sync>>,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            assets_fn: None,
            history_fn: None,
            total_supply_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = d.as_millis() as u64;
        self
    }

    // Assets
    pub fn with_assets_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Vec<PeggedAsset>, PegError> + Send + Sync + 'static,
    {
        self.assets_fn = Some(Arc::new(f));
        self
    }
    pub fn returns_assets_ok(mut self, assets: Vec<PeggedAsset>) -> Self {
        self.assets_fn = Some(Arc::new(move || Ok(assets.clone())));
        self
    }

    // History
    pub fn with_history_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<AssetHistory, PegError> + Send + Sync + 'static,
    {
        self.history_fn = Some(Arc::new(f));
        self
    }
    pub fn returns_history_ok(mut self, points: Vec<SeriesPoint>) -> Self {
        self.history_fn = Some(Arc::new(move |id| {
            Ok(AssetHistory {
                id: id.to_string(),
                points: points.clone(),
            })
        }));
        self
    }

    // Total supply
    pub fn with_total_supply_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Vec<SeriesPoint>, PegError> + Send + Sync + 'static,
    {
        self.total_supply_fn = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delay_ms: self.delay_ms,
            assets_fn: self.assets_fn,
            history_fn: self.history_fn,
            total_supply_fn: self.total_supply_fn,
        })
    }
}
