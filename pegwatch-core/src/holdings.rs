//! Treasury-holdings comparisons and pipeline aggregates over reference tables.
//!
//! Holdings are in USD billions, pipeline market caps in USD millions.

use std::cmp::Ordering;

use pegwatch_types::{HolderRow, PipelineEntry, SovereignHolder, TreasuryHolding, TreasuryShare};

/// Name of the synthetic leaderboard row combining every stablecoin issuer.
pub const STABLECOIN_ISSUERS: &str = "Stablecoin Issuers";

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Combined treasury holdings of every issuer.
#[must_use]
pub fn total_treasury_holdings(holdings: &[TreasuryHolding]) -> f64 {
    holdings.iter().map(|h| h.treasury_holdings).sum()
}

/// 1-based rank the combined issuers would take among `sovereigns`.
///
/// `sovereigns` is expected in descending order. The rank is the position of
/// the first sovereign holding strictly less than `total`, or one past the
/// end when none does.
#[must_use]
pub fn stablecoin_rank(total: f64, sovereigns: &[SovereignHolder]) -> usize {
    sovereigns
        .iter()
        .position(|s| s.holdings < total)
        .map_or(sovereigns.len() + 1, |i| i + 1)
}

/// Issuers sorted by holdings (largest first) with their share of the total.
#[must_use]
pub fn treasury_breakdown(holdings: &[TreasuryHolding]) -> Vec<TreasuryShare> {
    let total = total_treasury_holdings(holdings);
    let mut sorted: Vec<&TreasuryHolding> = holdings.iter().collect();
    sorted.sort_by(|a, b| descending(a.treasury_holdings, b.treasury_holdings));
    sorted
        .into_iter()
        .map(|h| TreasuryShare {
            symbol: h.symbol.clone(),
            name: h.name.clone(),
            holdings: h.treasury_holdings,
            share_percent: if total > 0.0 {
                h.treasury_holdings / total * 100.0
            } else {
                0.0
            },
            treasury_percent: h.treasury_percent,
        })
        .collect()
}

/// Sovereign holders plus the combined issuers row, largest first, at most `limit` rows.
///
/// Bar widths are relative to the top row.
#[must_use]
pub fn sovereign_leaderboard(
    sovereigns: &[SovereignHolder],
    stablecoin_total: f64,
    limit: usize,
) -> Vec<HolderRow> {
    let mut all: Vec<(&str, f64, bool)> = sovereigns
        .iter()
        .map(|s| (s.name.as_str(), s.holdings, false))
        .collect();
    all.push((STABLECOIN_ISSUERS, stablecoin_total, true));
    all.sort_by(|a, b| descending(a.1, b.1));
    all.truncate(limit);

    let top = all.first().map_or(0.0, |r| r.1);
    all.into_iter()
        .enumerate()
        .map(|(i, (name, holdings, is_stablecoin))| HolderRow {
            rank: i + 1,
            name: name.to_string(),
            holdings,
            is_stablecoin,
            width_percent: if top > 0.0 { holdings / top * 100.0 } else { 0.0 },
        })
        .collect()
}

/// Sum of the parent-company market caps across the pipeline.
#[must_use]
pub fn pipeline_total_company_mcap(entries: &[PipelineEntry]) -> f64 {
    entries.iter().filter_map(|e| e.company_mcap_m).sum()
}

/// Pipeline entries ordered by parent-company market cap, largest first.
///
/// Entries without a company market cap sort as 0; ties keep input order.
#[must_use]
pub fn pipeline_by_company_mcap(entries: &[PipelineEntry]) -> Vec<PipelineEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        descending(a.company_mcap_m.unwrap_or(0.0), b.company_mcap_m.unwrap_or(0.0))
    });
    sorted
}
