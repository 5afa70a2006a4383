use std::collections::{BTreeMap, BTreeSet};

use pegwatch_types::{FillPolicy, MergedRow, SeriesPoint};

/// Align per-symbol series into one table keyed by timestamp.
///
/// - Rows are the union of every timestamp across all series, strictly ascending.
/// - Every row carries an entry for every symbol in the active set, which is
///   the union of `symbols` and the keys of `series_by_symbol`.
/// - A symbol with no point at a row's timestamp is recorded as 0.
/// - Input order is not assumed. Two points of one symbol sharing a timestamp
///   overwrite each other; the later one in input order wins.
///
/// Empty input yields an empty table.
pub fn align<I, S>(symbols: I, series_by_symbol: &BTreeMap<String, Vec<SeriesPoint>>) -> Vec<MergedRow>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    align_with_policy(symbols, series_by_symbol, FillPolicy::ZeroFill)
}

/// Like [`align`], with an explicit policy for symbols missing at a timestamp.
///
/// Under [`FillPolicy::CarryForward`] a missing value repeats the symbol's last
/// observation; rows before its first observation still read 0.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pegwatch::core::align_with_policy",
        skip(symbols, series_by_symbol),
        fields(series = series_by_symbol.len(), policy = ?policy),
    )
)]
pub fn align_with_policy<I, S>(
    symbols: I,
    series_by_symbol: &BTreeMap<String, Vec<SeriesPoint>>,
    policy: FillPolicy,
) -> Vec<MergedRow>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut active: BTreeSet<String> = symbols.into_iter().map(Into::into).collect();
    active.extend(series_by_symbol.keys().cloned());

    let mut observed: BTreeMap<i64, BTreeMap<&str, f64>> = BTreeMap::new();
    for (symbol, points) in series_by_symbol {
        for p in points {
            observed
                .entry(p.timestamp)
                .or_default()
                .insert(symbol.as_str(), p.value);
        }
    }

    let carry = matches!(policy, FillPolicy::CarryForward);
    let mut last_seen: BTreeMap<&str, f64> = BTreeMap::new();
    let mut rows = Vec::with_capacity(observed.len());
    for (timestamp, present) in observed {
        let mut values = BTreeMap::new();
        for symbol in &active {
            let value = match present.get(symbol.as_str()) {
                Some(&v) => {
                    last_seen.insert(symbol.as_str(), v);
                    v
                }
                None if carry => last_seen.get(symbol.as_str()).copied().unwrap_or(0.0),
                None => 0.0,
            };
            values.insert(symbol.clone(), value);
        }
        rows.push(MergedRow { timestamp, values });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = rows.len(),
        symbols = active.len(),
        "aligned series"
    );

    rows
}

/// Re-align an already aligned table by treating every column as a series.
///
/// Under the zero-fill policy this is the identity on `align`'s output.
#[must_use]
pub fn realign(rows: &[MergedRow]) -> Vec<MergedRow> {
    let mut series: BTreeMap<String, Vec<SeriesPoint>> = BTreeMap::new();
    for row in rows {
        for (symbol, value) in &row.values {
            series
                .entry(symbol.clone())
                .or_default()
                .push(SeriesPoint::new(row.timestamp, *value));
        }
    }
    align(std::iter::empty::<String>(), &series)
}
