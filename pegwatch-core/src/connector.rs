use async_trait::async_trait;

use crate::PegError;
pub use pegwatch_types::ConnectorKey;
use pegwatch_types::{AssetHistory, PeggedAsset, SeriesPoint};

/// Focused role trait for connectors that list pegged assets.
#[async_trait]
pub trait AssetsProvider: Send + Sync {
    /// Fetch every pegged asset the provider knows, with its current circulating supply.
    async fn pegged_assets(&self) -> Result<Vec<PeggedAsset>, PegError>;
}

/// Focused role trait for connectors that provide per-asset supply history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch the circulating supply history of the asset with provider id `asset_id`.
    ///
    /// Points are returned in provider order; callers must not assume sorting.
    async fn history(&self, asset_id: &str) -> Result<AssetHistory, PegError>;
}

/// Focused role trait for connectors that provide aggregate supply across all assets.
#[async_trait]
pub trait TotalSupplyProvider: Send + Sync {
    /// Fetch the total circulating supply series.
    async fn total_supply(&self) -> Result<Vec<SeriesPoint>, PegError>;
}

/// Main trait implemented by all data connectors.
///
/// Connectors advertise capabilities by returning a trait object from the
/// matching `as_*_provider` accessor. The orchestrator only routes a call to
/// connectors that return `Some`.
pub trait PegConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "pegwatch-llama").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise asset-listing capability.
    fn as_assets_provider(&self) -> Option<&dyn AssetsProvider> {
        None
    }

    /// Advertise per-asset history capability.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Advertise aggregate supply capability.
    fn as_total_supply_provider(&self) -> Option<&dyn TotalSupplyProvider> {
        None
    }
}
