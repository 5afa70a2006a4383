//! Derived report types produced by the analytics layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bubble::BubbleItem;
use crate::config::{Color, FlowPeriod, TimeRange};
use crate::reference::LegislationEvent;
use crate::series::{AssetMeta, MergedRow};

/// Headline numbers for the supply chart over one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplySummary {
    /// Window the numbers refer to.
    pub range: TimeRange,
    /// Total supply in the last row of the window.
    pub latest_total: f64,
    /// Total supply in the first row of the window.
    pub first_total: f64,
    /// Change from first to latest, percent.
    pub change_percent: f64,
    /// Label shown next to the change ("all time", "YoY", "1M", ...).
    pub period_label: String,
}

/// Day-over-day change of one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerItem {
    /// Asset symbol.
    pub symbol: String,
    /// Asset color.
    pub color: Color,
    /// Supply change between the last two rows.
    pub change: f64,
    /// Supply in the last row.
    pub current_supply: f64,
    /// Change relative to the previous value, percent.
    pub pct_change: f64,
}

/// Net supply flow of one asset over a lookback period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEntry {
    /// Asset symbol.
    pub symbol: String,
    /// Asset color.
    pub color: Color,
    /// `current - past`.
    pub flow: f64,
    /// Value in the current row.
    pub current: f64,
    /// Value in the past row.
    pub past: f64,
    /// Bar width relative to the largest absolute flow, percent.
    pub width_percent: f64,
}

/// Net flows of every tracked asset over one lookback period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetFlowReport {
    /// Lookback period.
    pub period: FlowPeriod,
    /// Sum of every entry's flow.
    pub total_flow: f64,
    /// Entries sorted by absolute flow, largest first.
    pub entries: Vec<FlowEntry>,
    /// Largest absolute flow among the entries.
    pub max_abs_flow: f64,
}

/// One issuer's share of the combined stablecoin treasury holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasuryShare {
    /// Stablecoin symbol.
    pub symbol: String,
    /// Issuer name.
    pub name: String,
    /// Treasury holdings, USD billions.
    pub holdings: f64,
    /// Share of the combined holdings, percent.
    pub share_percent: f64,
    /// Share of the issuer's own reserves held in treasuries, percent.
    pub treasury_percent: f64,
}

/// One row of the sovereign treasury-holder leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolderRow {
    /// 1-based rank.
    pub rank: usize,
    /// Holder name.
    pub name: String,
    /// Holdings, USD billions.
    pub holdings: f64,
    /// Whether this is the combined stablecoin issuers row.
    pub is_stablecoin: bool,
    /// Bar width relative to the top holder, percent.
    pub width_percent: f64,
}

/// Tracked assets and their aligned supply history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SupplyTable {
    /// Tracked assets, largest first.
    pub assets: Vec<AssetMeta>,
    /// Aligned rows, ascending by timestamp.
    pub rows: Vec<MergedRow>,
}

impl SupplyTable {
    /// Symbols of the tracked assets, in rank order.
    #[must_use]
    pub fn symbols(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.symbol.clone()).collect()
    }
}

/// Everything the dashboard renders, computed from one fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Reference time the windows were computed against.
    pub generated_at: DateTime<Utc>,
    /// Tracked assets and aligned history.
    pub table: SupplyTable,
    /// One summary per [`TimeRange`], in display order.
    pub summaries: Vec<SupplySummary>,
    /// Day-over-day changes.
    pub ticker: Vec<TickerItem>,
    /// One report per [`FlowPeriod`]; empty when there is no history.
    pub net_flows: Vec<NetFlowReport>,
    /// Combined stablecoin treasury holdings, USD billions.
    pub treasury_total: f64,
    /// Per-issuer treasury shares.
    pub treasury_breakdown: Vec<TreasuryShare>,
    /// Rank of the combined issuers among sovereign holders.
    pub stablecoin_rank: usize,
    /// Sovereign leaderboard including the combined issuers row.
    pub leaderboard: Vec<HolderRow>,
    /// Events falling inside the aligned history.
    pub events: Vec<LegislationEvent>,
    /// Pipeline bubbles laid out on the configured canvas.
    pub bubbles: Vec<BubbleItem>,
}
