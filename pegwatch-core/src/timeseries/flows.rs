use pegwatch_types::{AssetMeta, FlowEntry, FlowPeriod, MergedRow, NetFlowReport, TickerItem};

use super::SECONDS_PER_DAY;
use super::window::nearest_row;

/// Change of every asset between the last two rows of the table.
///
/// With fewer than two rows the missing side reads 0.
#[must_use]
pub fn ticker_items(rows: &[MergedRow], assets: &[AssetMeta]) -> Vec<TickerItem> {
    let latest = rows.last();
    let prev = rows.len().checked_sub(2).map(|i| &rows[i]);
    assets
        .iter()
        .map(|asset| {
            let current_supply = latest.map_or(0.0, |r| r.get(&asset.symbol));
            let prev_supply = prev.map_or(0.0, |r| r.get(&asset.symbol));
            let change = current_supply - prev_supply;
            let base = current_supply - change;
            TickerItem {
                symbol: asset.symbol.clone(),
                color: asset.color.clone(),
                change,
                current_supply,
                pct_change: if base == 0.0 { 0.0 } else { change / base * 100.0 },
            }
        })
        .collect()
}

/// Net supply flow of every asset between the latest row and the row
/// nearest to `now - period`.
///
/// Returns `None` for an empty table.
#[must_use]
pub fn net_flows(
    rows: &[MergedRow],
    assets: &[AssetMeta],
    period: FlowPeriod,
    now: i64,
) -> Option<NetFlowReport> {
    let current = rows.last()?;
    let target = now.saturating_sub(period.days().saturating_mul(SECONDS_PER_DAY));
    let past = nearest_row(rows, target)?;

    let mut entries: Vec<FlowEntry> = assets
        .iter()
        .map(|asset| {
            let now_value = current.get(&asset.symbol);
            let past_value = past.get(&asset.symbol);
            FlowEntry {
                symbol: asset.symbol.clone(),
                color: asset.color.clone(),
                flow: now_value - past_value,
                current: now_value,
                past: past_value,
                width_percent: 0.0,
            }
        })
        .collect();

    let total_flow = entries.iter().map(|e| e.flow).sum();
    entries.sort_by(|a, b| b.flow.abs().total_cmp(&a.flow.abs()));
    let max_abs_flow = entries.iter().map(|e| e.flow.abs()).fold(0.0, f64::max);
    if max_abs_flow > 0.0 {
        for e in &mut entries {
            e.width_percent = e.flow.abs() / max_abs_flow * 100.0;
        }
    }

    Some(NetFlowReport {
        period,
        total_flow,
        entries,
        max_abs_flow,
    })
}
