//! Re-export of foundational types from `pegwatch-types`.
// Consolidated re-exports so downstream crates can depend on `pegwatch-core` only

pub use pegwatch_types::{Capability, ConnectorKey, PegError};

pub use pegwatch_types::{
    Color, FetchStrategy, FillPolicy, FlowPeriod, PackConfig, Palette, PegwatchConfig, TimeRange,
};

pub use pegwatch_types::{AssetHistory, AssetMeta, MergedRow, PeggedAsset, SeriesPoint};

pub use pegwatch_types::{BubbleInput, BubbleItem, Category};

pub use pegwatch_types::{
    EntryKind, EntryStatus, EventKind, LegislationEvent, PipelineEntry, ReferenceData,
    SovereignHolder, TreasuryHolding, WeightType,
};

pub use pegwatch_types::{
    DashboardSnapshot, FlowEntry, HolderRow, NetFlowReport, SupplySummary, SupplyTable,
    TickerItem, TreasuryShare,
};
