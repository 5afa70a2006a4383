//! Configuration types shared across the orchestrator, connectors and analytics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceData;

/// Opaque display color token (CSS hex in the builtin palette).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    /// Construct a color token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ordered list of colors assigned to assets by rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Colors in assignment order; indices wrap around.
    pub colors: Vec<Color>,
}

impl Palette {
    /// Color for the asset at `index`, cycling through the palette.
    ///
    /// An empty palette yields a neutral gray.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::new("#737373");
        }
        self.colors[index % self.colors.len()].clone()
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = [
            "#26A17B", // tether green
            "#2775CA", // usdc blue
            "#F5AC37", // dai yellow
            "#1a1a1a", "#6366f1", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316", "#84cc16",
        ];
        Self {
            colors: colors.into_iter().map(Color::new).collect(),
        }
    }
}

/// Strategy for selecting among eligible data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchStrategy {
    /// Use registration order and fall back to the next provider on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible providers concurrently and return the first success.
    Latency,
}

/// How the aligner fills a symbol that has no observation at a row's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FillPolicy {
    /// Record exactly 0. No interpolation, no carry.
    #[default]
    ZeroFill,
    /// Repeat the last observed value once the symbol has reported at least once.
    CarryForward,
}

/// Chart window selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    /// Last 30 days.
    M1,
    /// Last 90 days.
    M3,
    /// Last 180 days.
    M6,
    /// Last 365 days.
    Y1,
    /// Whole history.
    #[default]
    Max,
}

impl TimeRange {
    /// Every range in display order.
    pub const ALL: [Self; 5] = [Self::M1, Self::M3, Self::M6, Self::Y1, Self::Max];

    /// Window length in days, `None` for the whole history.
    #[must_use]
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::M1 => Some(30),
            Self::M3 => Some(90),
            Self::M6 => Some(180),
            Self::Y1 => Some(365),
            Self::Max => None,
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::M1 => "1M",
            Self::M3 => "3M",
            Self::M6 => "6M",
            Self::Y1 => "1Y",
            Self::Max => "Max",
        }
    }

    /// Label shown next to a change percentage.
    #[must_use]
    pub const fn period_label(self) -> &'static str {
        match self {
            Self::Max => "all time",
            Self::Y1 => "YoY",
            other => other.label(),
        }
    }
}

/// Net-flow lookback selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlowPeriod {
    /// 7 days.
    D7,
    /// 30 days.
    #[default]
    D30,
    /// 90 days.
    D90,
}

impl FlowPeriod {
    /// Every period in display order.
    pub const ALL: [Self; 3] = [Self::D7, Self::D30, Self::D90];

    /// Lookback in days.
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::D7 => 7,
            Self::D30 => 30,
            Self::D90 => 90,
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::D7 => "7d",
            Self::D30 => "30d",
            Self::D90 => "90d",
        }
    }
}

/// Bubble packer tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackConfig {
    /// Radius assigned to the smallest (or zero) value.
    pub min_radius: f64,
    /// Radius assigned to the largest value.
    pub max_radius: f64,
    /// Minimum gap between two circles.
    pub margin: f64,
    /// Minimum gap between a circle and the canvas edge.
    pub edge_margin: f64,
    /// Spiral angle increment per candidate, in radians.
    pub angle_step: f64,
    /// Spiral radius growth per radian.
    pub radius_step: f64,
    /// Candidates tried per circle before settling for the last one.
    pub max_steps: usize,
    /// Canvas width used by the dashboard snapshot.
    pub canvas_width: f64,
    /// Canvas height used by the dashboard snapshot.
    pub canvas_height: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            min_radius: 18.0,
            max_radius: 80.0,
            margin: 4.0,
            edge_margin: 8.0,
            angle_step: 0.1,
            radius_step: 0.8,
            max_steps: 20_000,
            canvas_width: 800.0,
            canvas_height: 500.0,
        }
    }
}

/// Global configuration for the `Pegwatch` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PegwatchConfig {
    /// Number of assets (by circulating supply) tracked in the supply table.
    pub top_n: usize,
    /// Strategy for fetching from multiple providers.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional deadline for the whole history fan-out.
    pub request_timeout: Option<Duration>,
    /// Gap policy used when aligning histories.
    pub fill_policy: FillPolicy,
    /// Colors assigned to assets by rank.
    pub palette: Palette,
    /// Bubble layout tuning and canvas size.
    pub pack: PackConfig,
    /// Curated treasury, sovereign, legislation and pipeline tables.
    pub reference: ReferenceData,
}

impl Default for PegwatchConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
            fill_policy: FillPolicy::default(),
            palette: Palette::default(),
            pack: PackConfig::default(),
            reference: ReferenceData::builtin(),
        }
    }
}
