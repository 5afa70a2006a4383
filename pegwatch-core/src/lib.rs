//! pegwatch-core
//!
//! Connector traits and the pure analytics shared across the pegwatch
//! ecosystem.
//!
//! - `types`: re-exports of the data model from `pegwatch-types`.
//! - `connector`: the `PegConnector` trait and capability provider traits.
//! - `timeseries`: aligning per-asset histories into one table and the
//!   window, ticker and net-flow reports derived from it.
//! - `layout`: greedy spiral packing of value-sized circles.
//! - `holdings`: treasury-holdings comparisons against sovereign holders.
//! - `format`: number and date formatting used by dashboard widgets.
//!
//! Everything outside `connector` is synchronous, allocation-only and total:
//! no function here performs I/O or returns an error.
#![warn(missing_docs)]

/// Connector capability traits and the primary `PegConnector` interface.
pub mod connector;
/// Compact number and date formatting.
pub mod format;
/// Treasury-holdings and pipeline analytics over reference tables.
pub mod holdings;
/// Circle packing for bubble charts.
pub mod layout;
/// Time-series alignment and derived reports.
pub mod timeseries;
pub mod types;

pub use connector::PegConnector;
pub use layout::pack::{pack, pipeline_bubbles, radius_for};
pub use timeseries::align::{align, align_with_policy, realign};
pub use timeseries::flows::{net_flows, ticker_items};
pub use timeseries::window::{
    change_percent, events_in_range, nearest_row, row_total, supply_summary, window_slice,
    window_slice_days,
};
pub use types::*;
