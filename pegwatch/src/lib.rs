//! pegwatch
//!
//! High-level stablecoin supply dashboard engine that routes requests across
//! pluggable connectors and derives every dashboard widget from the result.
//!
//! Overview
//! - Register one or more connectors (e.g., `pegwatch-llama`, `pegwatch-mock`).
//! - Choose a fetch strategy: priority-with-fallback or latency race.
//! - Fetch the top assets, their aligned supply history, or a full
//!   [`DashboardSnapshot`] with summaries, flows, treasury comparisons and the
//!   pipeline bubble layout.
//!
//! Key behaviors
//! - Per-provider timeouts on every connector call, plus an optional deadline
//!   over the whole history fan-out.
//! - Errors are collapsed uniformly: `Unsupported` when no connector advertises
//!   a capability, `NotFound` when every connector reports the asset unknown,
//!   `AllProvidersTimedOut`, otherwise `AllProvidersFailed` with the details.
//! - Everything after the fetch phase is pure computation from `pegwatch-core`.
//!
//! Quickstart
//! ```rust,ignore
//! use std::sync::Arc;
//! use pegwatch::Pegwatch;
//!
//! let llama = Arc::new(pegwatch_llama::LlamaConnector::try_default()?);
//! let pw = Pegwatch::builder()
//!     .with_connector(llama)
//!     .top_n(10)
//!     .build()?;
//!
//! let snapshot = pw.snapshot(chrono::Utc::now()).await?;
//! println!("tracking {} assets", snapshot.table.assets.len());
//! ```
//!
//! See `pegwatch/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Pegwatch, PegwatchBuilder};
pub use router::snapshot::LEADERBOARD_LIMIT;

// Re-export core types for convenience
pub use pegwatch_core::{
    AssetHistory,
    AssetMeta,
    // Layout
    BubbleInput,
    BubbleItem,
    Capability,
    Category,
    Color,
    // Reports
    DashboardSnapshot,
    // Configuration
    FetchStrategy,
    FillPolicy,
    FlowEntry,
    FlowPeriod,
    HolderRow,
    LegislationEvent,
    MergedRow,
    NetFlowReport,
    PackConfig,
    Palette,
    // Connector surface
    PegConnector,
    PegError,
    PeggedAsset,
    PegwatchConfig,
    PipelineEntry,
    ReferenceData,
    SeriesPoint,
    SovereignHolder,
    SupplySummary,
    SupplyTable,
    TickerItem,
    TimeRange,
    TreasuryHolding,
    TreasuryShare,
};
