use pegwatch_types::{LegislationEvent, MergedRow, SupplySummary, TimeRange};

use super::SECONDS_PER_DAY;

/// Rows of an ascending table inside a chart range, measured back from `now`.
///
/// [`TimeRange::Max`] keeps everything; the other ranges defer to
/// [`window_slice_days`].
#[must_use]
pub fn window_slice(rows: &[MergedRow], range: TimeRange, now: i64) -> &[MergedRow] {
    match range.days() {
        Some(days) => window_slice_days(rows, days, now),
        None => rows,
    }
}

/// Rows of an ascending table with `timestamp >= now - days * 86400`.
///
/// When the cutoff excludes every row of a non-empty table, the single latest
/// row is returned, so any window, including 0 days, ends on the latest value.
#[must_use]
pub fn window_slice_days(rows: &[MergedRow], days: i64, now: i64) -> &[MergedRow] {
    let cutoff = now.saturating_sub(days.saturating_mul(SECONDS_PER_DAY));
    let start = rows.partition_point(|r| r.timestamp < cutoff);
    if start == rows.len() && !rows.is_empty() {
        return &rows[rows.len() - 1..];
    }
    &rows[start..]
}

/// Row whose timestamp is closest to `target`.
///
/// Linear scan; on equal distance the first row encountered wins.
#[must_use]
pub fn nearest_row(rows: &[MergedRow], target: i64) -> Option<&MergedRow> {
    let mut best: Option<(&MergedRow, u64)> = None;
    for row in rows {
        let diff = row.timestamp.abs_diff(target);
        match best {
            Some((_, d)) if diff >= d => {}
            _ => best = Some((row, diff)),
        }
    }
    best.map(|(row, _)| row)
}

/// Sum of `row` over the given symbols; absent symbols count as 0.
#[must_use]
pub fn row_total<S: AsRef<str>>(row: &MergedRow, symbols: &[S]) -> f64 {
    symbols.iter().map(|s| row.get(s.as_ref())).sum()
}

/// Percent change from `first` to `latest`, or 0 when `first` is not positive.
#[must_use]
pub fn change_percent(first: f64, latest: f64) -> f64 {
    if first > 0.0 {
        (latest - first) / first * 100.0
    } else {
        0.0
    }
}

/// Headline totals of the supply chart for one window.
#[must_use]
pub fn supply_summary<S: AsRef<str>>(
    rows: &[MergedRow],
    symbols: &[S],
    range: TimeRange,
    now: i64,
) -> SupplySummary {
    let slice = window_slice(rows, range, now);
    let total_at = |row: Option<&MergedRow>| row.map_or(0.0, |r| row_total(r, symbols));
    let latest_total = total_at(slice.last());
    let first_total = total_at(slice.first());
    SupplySummary {
        range,
        latest_total,
        first_total,
        change_percent: change_percent(first_total, latest_total),
        period_label: range.period_label().to_string(),
    }
}

/// Events dated within `[start, end]`, in input order.
#[must_use]
pub fn events_in_range(events: &[LegislationEvent], start: i64, end: i64) -> Vec<LegislationEvent> {
    events
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}
