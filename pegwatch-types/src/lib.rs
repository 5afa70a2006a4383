//! Pegwatch-specific data transfer objects, configuration primitives and the
//! curated reference tables consumed by the analytics layer.
#![warn(missing_docs)]

mod bubble;
mod config;
mod connector;
mod error;
mod reference;
mod reports;
mod series;

pub use bubble::{BubbleInput, BubbleItem, Category};
pub use config::{
    Color, FetchStrategy, FillPolicy, FlowPeriod, PackConfig, Palette, PegwatchConfig, TimeRange,
};
pub use connector::{Capability, ConnectorKey};
pub use error::PegError;
pub use reference::{
    EntryKind, EntryStatus, EventKind, LegislationEvent, PipelineEntry, ReferenceData,
    SovereignHolder, TreasuryHolding, WeightType,
};
pub use reports::{
    DashboardSnapshot, FlowEntry, HolderRow, NetFlowReport, SupplySummary, SupplyTable,
    TickerItem, TreasuryShare,
};
pub use series::{AssetHistory, AssetMeta, MergedRow, PeggedAsset, SeriesPoint};
