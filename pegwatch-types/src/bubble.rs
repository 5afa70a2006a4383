use serde::{Deserialize, Serialize};

/// Pipeline category of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Category {
    /// Established stablecoin issuer.
    IncumbentIssuer,
    /// Card networks and payment processors.
    Payments,
    /// Banks and asset managers.
    TradFi,
    /// Large consumer technology platforms.
    BigTech,
    /// Consumer fintech apps.
    Fintech,
    /// European banks.
    EuBanking,
    /// Politically affiliated DeFi ventures.
    PoliticalDefi,
    /// Decentralized finance protocols.
    DeFi,
    /// Crypto-native companies.
    Crypto,
}

impl Category {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IncumbentIssuer => "Incumbent Issuer",
            Self::Payments => "Payments",
            Self::TradFi => "TradFi",
            Self::BigTech => "BigTech",
            Self::Fintech => "Fintech",
            Self::EuBanking => "EU Banking",
            Self::PoliticalDefi => "Political/DeFi",
            Self::DeFi => "DeFi",
            Self::Crypto => "Crypto",
        }
    }

    /// Whether the category is crypto-native (issuers, DeFi, crypto firms).
    #[must_use]
    pub const fn is_crypto_native(self) -> bool {
        matches!(
            self,
            Self::IncumbentIssuer | Self::DeFi | Self::Crypto | Self::PoliticalDefi
        )
    }
}

/// A value to be drawn as a circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleInput {
    /// Text drawn inside or next to the circle.
    pub label: String,
    /// Positive magnitude driving the radius.
    pub value: f64,
    /// Category used for coloring.
    pub category: Category,
}

impl BubbleInput {
    /// Construct an input.
    pub fn new(label: impl Into<String>, value: f64, category: Category) -> Self {
        Self {
            label: label.into(),
            value,
            category,
        }
    }
}

/// A placed circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleItem {
    /// Label copied from the input.
    pub label: String,
    /// Value copied from the input.
    pub value: f64,
    /// Category copied from the input.
    pub category: Category,
    /// Resolved radius.
    pub radius: f64,
    /// Center x in canvas coordinates.
    pub x: f64,
    /// Center y in canvas coordinates.
    pub y: f64,
}
