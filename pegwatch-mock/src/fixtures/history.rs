use pegwatch_core::{AssetHistory, SeriesPoint};

use super::{FIXTURE_DAYS, FIXTURE_END, assets};

const DAY: i64 = 86_400;

/// Deterministic daily history ending at `FIXTURE_END` with the listed supply.
///
/// Supply grows linearly from 70% of the final value. Ids whose numeric part
/// is odd skip every seventh day so that alignment has gaps to fill.
pub fn by_id(id: &str) -> Option<AssetHistory> {
    let (_, current) = assets::by_id(id)?;
    let sparse = id
        .chars()
        .filter(char::is_ascii_digit)
        .last()
        .and_then(|c| c.to_digit(10))
        .is_some_and(|d| d % 2 == 1);

    let start = FIXTURE_END - (FIXTURE_DAYS - 1) * DAY;
    let points = (0..FIXTURE_DAYS)
        .filter(|d| !sparse || d % 7 != 3 || *d == FIXTURE_DAYS - 1)
        .map(|d| {
            #[allow(clippy::cast_precision_loss)]
            let progress = d as f64 / (FIXTURE_DAYS - 1) as f64;
            SeriesPoint::new(start + d * DAY, current * (0.7 + 0.3 * progress))
        })
        .collect();
    Some(AssetHistory {
        id: id.to_string(),
        points,
    })
}

/// Sum of every fixture history, day by day.
pub fn total() -> Vec<SeriesPoint> {
    let start = FIXTURE_END - (FIXTURE_DAYS - 1) * DAY;
    let final_total: f64 = assets::LISTING.iter().map(|a| a.4).sum();
    (0..FIXTURE_DAYS)
        .map(|d| {
            #[allow(clippy::cast_precision_loss)]
            let progress = d as f64 / (FIXTURE_DAYS - 1) as f64;
            SeriesPoint::new(start + d * DAY, final_total * (0.7 + 0.3 * progress))
        })
        .collect()
}
