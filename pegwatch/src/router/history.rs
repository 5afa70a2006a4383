use std::collections::BTreeMap;

use pegwatch_core::{AssetHistory, PegError, SeriesPoint, SupplyTable};

use crate::Pegwatch;
use crate::pegwatch_router_method;
use crate::router::util::{Route, fetch_all_within};

impl Pegwatch {
    pegwatch_router_method! {
        /// Fetch the circulating supply history of one asset by provider id.
        ///
        /// Honors the builder's `FetchStrategy`. When every attempted provider
        /// reports the id as unknown the result is `NotFound("history for {id}")`.
        method: history(asset_id: &str) -> AssetHistory,
        accessor: as_history_provider,
        route: Route::History { asset_id },
        call: history(asset_id)
    }

    /// Fetch the history of every top asset concurrently and align them into one table.
    ///
    /// Behavior:
    /// - Assets come from [`top_assets`](Self::top_assets); each history goes
    ///   through [`history`](Self::history) with its own routing and timeout.
    /// - The whole fan-out is bounded by the configured request timeout.
    /// - Histories are aligned by timestamp with the configured fill policy.
    ///
    /// # Errors
    /// Fails when the asset listing fails, when any single history fails, or with
    /// `RequestTimeout("history")` when the request deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "pegwatch::router", skip(self))
    )]
    pub async fn supply_table(&self) -> Result<SupplyTable, PegError> {
        let assets = self.top_assets().await?;

        let tasks = assets.iter().map(|a| self.history(&a.id));
        let results = fetch_all_within(tasks, self.cfg.request_timeout).await?;

        let mut series: BTreeMap<String, Vec<SeriesPoint>> = BTreeMap::new();
        for (asset, res) in assets.iter().zip(results) {
            let history = res?;
            series.insert(asset.symbol.clone(), history.points);
        }

        let rows = pegwatch_core::align_with_policy(
            assets.iter().map(|a| a.symbol.clone()),
            &series,
            self.cfg.fill_policy,
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(assets = assets.len(), rows = rows.len(), "supply table aligned");

        Ok(SupplyTable { assets, rows })
    }
}
