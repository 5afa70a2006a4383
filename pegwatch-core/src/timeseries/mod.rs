//! Time-series utilities shared by the orchestrator and the dashboard reports.
//!
//! Modules include:
//! - `align`: full outer join of per-asset series on timestamp
//! - `window`: time-range slicing, nearest-row lookup and supply summaries
//! - `flows`: ticker changes and net flows between two rows
/// Alignment of sparse per-asset series into one dense table.
pub mod align;
/// Ticker and net-flow reports.
pub mod flows;
/// Window slicing and summary helpers.
pub mod window;

/// Seconds in one day; windows and lookbacks are expressed in whole days.
pub const SECONDS_PER_DAY: i64 = 86_400;
