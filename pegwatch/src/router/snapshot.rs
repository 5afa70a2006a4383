use chrono::{DateTime, Utc};
use pegwatch_core::holdings::{
    sovereign_leaderboard, stablecoin_rank, total_treasury_holdings, treasury_breakdown,
};
use pegwatch_core::{
    DashboardSnapshot, FlowPeriod, PegError, SupplyTable, TimeRange, events_in_range, net_flows,
    pack, pipeline_bubbles, supply_summary, ticker_items,
};

use crate::Pegwatch;

/// Rows shown in the sovereign leaderboard, the issuers row included.
pub const LEADERBOARD_LIMIT: usize = 20;

impl Pegwatch {
    /// Fetch the supply table and derive every dashboard report from it.
    ///
    /// `now` is the reference time for the chart windows and flow lookbacks.
    ///
    /// # Errors
    /// Propagates the error from [`supply_table`](Self::supply_table).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "pegwatch::router", skip(self, now), fields(now = %now))
    )]
    pub async fn snapshot(&self, now: DateTime<Utc>) -> Result<DashboardSnapshot, PegError> {
        let table = self.supply_table().await?;
        Ok(self.snapshot_from_table(table, now))
    }

    /// Derive every dashboard report from an already fetched table.
    ///
    /// Pure computation over `table` and the configured reference data.
    #[must_use]
    pub fn snapshot_from_table(&self, table: SupplyTable, now: DateTime<Utc>) -> DashboardSnapshot {
        let ts = now.timestamp();
        let symbols = table.symbols();
        let reference = &self.cfg.reference;

        let summaries = TimeRange::ALL
            .iter()
            .map(|&range| supply_summary(&table.rows, &symbols, range, ts))
            .collect();
        let ticker = ticker_items(&table.rows, &table.assets);
        let flows = FlowPeriod::ALL
            .iter()
            .filter_map(|&period| net_flows(&table.rows, &table.assets, period, ts))
            .collect();

        let treasury_total = total_treasury_holdings(&reference.treasury_holdings);
        let events = match (table.rows.first(), table.rows.last()) {
            (Some(first), Some(last)) => {
                events_in_range(&reference.events, first.timestamp, last.timestamp)
            }
            _ => Vec::new(),
        };
        let pack_cfg = &self.cfg.pack;
        let bubbles = pack(
            &pipeline_bubbles(&reference.pipeline),
            pack_cfg.canvas_width,
            pack_cfg.canvas_height,
            pack_cfg,
        );

        DashboardSnapshot {
            generated_at: now,
            summaries,
            ticker,
            net_flows: flows,
            treasury_total,
            treasury_breakdown: treasury_breakdown(&reference.treasury_holdings),
            stablecoin_rank: stablecoin_rank(treasury_total, &reference.sovereigns),
            leaderboard: sovereign_leaderboard(
                &reference.sovereigns,
                treasury_total,
                LEADERBOARD_LIMIT,
            ),
            events,
            bubbles,
            table,
        }
    }
}
