//! Curated reference tables: issuer treasury holdings, sovereign holders,
//! legislation events and the stablecoin pipeline.
//!
//! These are read-only inputs. The builtin copy reflects issuer attestations
//! and public announcements as of February 2026; callers with fresher figures
//! load their own copy with [`ReferenceData::from_json_str`].

use serde::{Deserialize, Serialize};

use crate::bubble::Category;
use crate::error::PegError;

/// US Treasury exposure of one stablecoin issuer, from its attestation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasuryHolding {
    /// Stablecoin symbol.
    pub symbol: String,
    /// Issuer name.
    pub name: String,
    /// Treasury holdings, USD billions.
    pub treasury_holdings: f64,
    /// Total reserves, USD billions.
    pub total_reserves: f64,
    /// Share of reserves held in treasuries, percent.
    pub treasury_percent: f64,
    /// Attestation date (ISO 8601).
    pub last_updated: String,
    /// Attestation URL.
    pub source: String,
}

/// A sovereign holder of US Treasuries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SovereignHolder {
    /// Country or territory.
    pub name: String,
    /// Holdings, USD billions (all treasury types).
    pub holdings: f64,
}

/// Kind of a dated event drawn over the supply chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A bill signed into law.
    Legislation,
    /// Agency rule or guidance.
    Regulatory,
    /// Market event.
    Market,
}

/// A dated regulatory or market event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegislationEvent {
    /// Event time, seconds since the UNIX epoch.
    pub date: i64,
    /// Short chart label.
    pub label: String,
    /// Longer description.
    pub description: String,
    /// Event kind.
    pub kind: EventKind,
}

/// Whether a pipeline company already issues a stablecoin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Existing issuer.
    Incumbent,
    /// New entrant.
    New,
    /// Reported but unconfirmed.
    Rumored,
}

/// Launch status of a pipeline product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Product is live.
    Live,
    /// Launch announced.
    Launching,
    /// In development.
    Building,
    /// Press reports only.
    Reported,
}

/// Which market cap an entry is weighted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightType {
    /// Circulating supply of the entry's stablecoin.
    StablecoinMcap,
    /// Market cap (or AUM) of the parent company.
    CompanyMcap,
}

impl WeightType {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StablecoinMcap => "stablecoin mcap",
            Self::CompanyMcap => "company mcap",
        }
    }
}

/// A company building or issuing a stablecoin product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineEntry {
    /// Company name.
    pub name: String,
    /// Stablecoin or company ticker.
    pub ticker: Option<String>,
    /// Company web domain.
    pub domain: Option<String>,
    /// Stablecoin market cap, USD millions.
    pub stablecoin_mcap_m: Option<f64>,
    /// Parent company market cap or AUM, USD millions.
    pub company_mcap_m: Option<f64>,
    /// Category.
    pub category: Category,
    /// Incumbent, new or rumored.
    pub kind: EntryKind,
    /// Launch status.
    pub status: EntryStatus,
    /// Launch date, free text.
    pub date: Option<String>,
    /// One-line note.
    pub note: String,
}

impl PipelineEntry {
    /// Weight used for sizing: the stablecoin market cap when known and
    /// positive, otherwise the parent company market cap.
    #[must_use]
    pub fn weight(&self) -> Option<(f64, WeightType)> {
        match (self.stablecoin_mcap_m, self.company_mcap_m) {
            (Some(s), _) if s > 0.0 => Some((s, WeightType::StablecoinMcap)),
            (_, Some(c)) if c > 0.0 => Some((c, WeightType::CompanyMcap)),
            _ => None,
        }
    }
}

/// Every curated table consumed by the holdings and pipeline analytics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Issuer treasury holdings.
    pub treasury_holdings: Vec<TreasuryHolding>,
    /// Sovereign holders, descending by holdings.
    pub sovereigns: Vec<SovereignHolder>,
    /// Chart overlay events.
    pub events: Vec<LegislationEvent>,
    /// Stablecoin pipeline.
    pub pipeline: Vec<PipelineEntry>,
}

impl ReferenceData {
    /// Parse an externally maintained copy of the tables.
    ///
    /// # Errors
    /// Returns `PegError::Data` if the JSON does not match the table schema.
    pub fn from_json_str(json: &str) -> Result<Self, PegError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The tables shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            treasury_holdings: builtin_treasury_holdings(),
            sovereigns: builtin_sovereigns(),
            events: builtin_events(),
            pipeline: builtin_pipeline(),
        }
    }
}

fn holding(
    symbol: &str,
    name: &str,
    treasury_holdings: f64,
    total_reserves: f64,
    treasury_percent: f64,
    last_updated: &str,
    source: &str,
) -> TreasuryHolding {
    TreasuryHolding {
        symbol: symbol.to_string(),
        name: name.to_string(),
        treasury_holdings,
        total_reserves,
        treasury_percent,
        last_updated: last_updated.to_string(),
        source: source.to_string(),
    }
}

fn builtin_treasury_holdings() -> Vec<TreasuryHolding> {
    vec![
        holding("USDT", "Tether", 141.0, 193.0, 73.0, "2025-12-31", "https://tether.to/transparency/"),
        holding("USDC", "Circle", 40.0, 70.7, 57.0, "2026-02-02", "https://www.circle.com/transparency"),
        holding("DAI", "MakerDAO", 2.2, 5.3, 42.0, "2025-01-01", "https://makerburn.com/"),
        holding("FDUSD", "First Digital", 2.5, 2.8, 89.0, "2025-01-01", "https://firstdigitallabs.com/"),
        holding("USDS", "Sky Dollar", 1.8, 4.2, 43.0, "2025-01-01", "https://sky.money/"),
    ]
}

fn builtin_sovereigns() -> Vec<SovereignHolder> {
    [
        ("Japan", 1100.0),
        ("China", 775.0),
        ("UK", 750.0),
        ("Luxembourg", 400.0),
        ("Canada", 350.0),
        ("Belgium", 330.0),
        ("Ireland", 310.0),
        ("Switzerland", 290.0),
        ("Cayman Islands", 285.0),
        ("Taiwan", 275.0),
        ("India", 245.0),
        ("Hong Kong", 230.0),
        ("Brazil", 225.0),
        ("Singapore", 210.0),
        ("France", 195.0),
        ("Saudi Arabia", 185.0),
        ("South Korea", 180.0),
        ("Germany", 175.0),
        ("Norway", 165.0),
        ("Mexico", 95.0),
    ]
    .into_iter()
    .map(|(name, holdings)| SovereignHolder {
        name: name.to_string(),
        holdings,
    })
    .collect()
}

fn builtin_events() -> Vec<LegislationEvent> {
    vec![LegislationEvent {
        // 2025-07-15T00:00:00Z
        date: 1_752_537_600,
        label: "GENIUS Act Signed".to_string(),
        description: "GENIUS Act signed into law".to_string(),
        kind: EventKind::Legislation,
    }]
}

struct Seed {
    name: &'static str,
    ticker: Option<&'static str>,
    domain: Option<&'static str>,
    stablecoin_mcap_m: Option<f64>,
    company_mcap_m: Option<f64>,
    category: Category,
    kind: EntryKind,
    status: EntryStatus,
    date: Option<&'static str>,
    note: &'static str,
}

impl From<Seed> for PipelineEntry {
    fn from(s: Seed) -> Self {
        Self {
            name: s.name.to_string(),
            ticker: s.ticker.map(str::to_string),
            domain: s.domain.map(str::to_string),
            stablecoin_mcap_m: s.stablecoin_mcap_m,
            company_mcap_m: s.company_mcap_m,
            category: s.category,
            kind: s.kind,
            status: s.status,
            date: s.date.map(str::to_string),
            note: s.note.to_string(),
        }
    }
}

#[allow(clippy::too_many_lines)]
fn builtin_pipeline() -> Vec<PipelineEntry> {
    use Category as C;
    use EntryKind as K;
    use EntryStatus as S;

    let seeds = [
        Seed { name: "Tether", ticker: Some("USDT"), domain: Some("tether.to"), stablecoin_mcap_m: Some(187_000.0), company_mcap_m: None, category: C::IncumbentIssuer, kind: K::Incumbent, status: S::Live, date: None, note: "Global dominant, 60%+ market share. 17th largest holder of US Treasuries." },
        Seed { name: "Circle", ticker: Some("USDC"), domain: Some("circle.com"), stablecoin_mcap_m: Some(72_000.0), company_mcap_m: None, category: C::IncumbentIssuer, kind: K::Incumbent, status: S::Live, date: None, note: "NYSE-listed (CRCL). US institutional standard." },
        Seed { name: "Visa", ticker: None, domain: Some("visa.com"), stablecoin_mcap_m: None, company_mcap_m: Some(633_000.0), category: C::Payments, kind: K::New, status: S::Live, date: None, note: "Stablecoin-linked card spend $3.5B annualized. USDC settlement live." },
        Seed { name: "Mastercard", ticker: None, domain: Some("mastercard.com"), stablecoin_mcap_m: None, company_mcap_m: Some(510_000.0), category: C::Payments, kind: K::New, status: S::Building, date: None, note: "Multi-Token Network for tokenized settlement." },
        Seed { name: "Fidelity", ticker: Some("FIDD"), domain: Some("fidelity.com"), stablecoin_mcap_m: None, company_mcap_m: Some(5_800_000.0), category: C::TradFi, kind: K::New, status: S::Launching, date: Some("Feb 2026"), note: "Fidelity Digital Dollar on Ethereum. $5.8T AUM." },
        Seed { name: "JPMorgan", ticker: Some("JPMD"), domain: Some("jpmorgan.com"), stablecoin_mcap_m: None, company_mcap_m: Some(4_100_000.0), category: C::TradFi, kind: K::New, status: S::Live, date: None, note: "JPMD deposit token on Coinbase Base L2." },
        Seed { name: "Amazon", ticker: None, domain: Some("amazon.com"), stablecoin_mcap_m: None, company_mcap_m: Some(2_300_000.0), category: C::BigTech, kind: K::Rumored, status: S::Reported, date: None, note: "Reportedly pursuing stablecoin for payment discounts." },
        Seed { name: "Meta", ticker: None, domain: Some("meta.com"), stablecoin_mcap_m: None, company_mcap_m: Some(1_600_000.0), category: C::BigTech, kind: K::Rumored, status: S::Reported, date: None, note: "May re-enter after Diem failure. 3B+ users." },
        Seed { name: "Walmart", ticker: None, domain: Some("walmart.com"), stablecoin_mcap_m: None, company_mcap_m: Some(648_000.0), category: C::BigTech, kind: K::Rumored, status: S::Reported, date: None, note: "Reportedly pursuing stablecoin. Massive merchant network." },
        Seed { name: "Stripe", ticker: Some("USDB"), domain: Some("stripe.com"), stablecoin_mcap_m: None, company_mcap_m: Some(91_000.0), category: C::Payments, kind: K::New, status: S::Live, date: None, note: "Acquired Bridge for $1.1B. Stablecoin accounts in 101 countries." },
        Seed { name: "PayPal", ticker: Some("PYUSD"), domain: Some("paypal.com"), stablecoin_mcap_m: Some(850.0), company_mcap_m: Some(70_000.0), category: C::Fintech, kind: K::New, status: S::Live, date: None, note: "PYUSD via Paxos. Expanding cross-border + LatAm." },
        Seed { name: "Robinhood", ticker: None, domain: Some("robinhood.com"), stablecoin_mcap_m: None, company_mcap_m: Some(40_000.0), category: C::Fintech, kind: K::New, status: S::Live, date: None, note: "Founding partner of Global Dollar Network (USDG). 24M+ accounts." },
        Seed { name: "Revolut", ticker: None, domain: Some("revolut.com"), stablecoin_mcap_m: None, company_mcap_m: Some(45_000.0), category: C::Fintech, kind: K::New, status: S::Building, date: None, note: "Big stablecoin plans for 2026. 50M+ customers." },
        Seed { name: "Klarna", ticker: None, domain: Some("klarna.com"), stablecoin_mcap_m: None, company_mcap_m: Some(14_700.0), category: C::Fintech, kind: K::New, status: S::Building, date: None, note: "Stablecoin plans for 2026. 150M+ users globally." },
        Seed { name: "SocGen", ticker: Some("EURCV"), domain: Some("societegenerale.com"), stablecoin_mcap_m: None, company_mcap_m: Some(1_800_000.0), category: C::EuBanking, kind: K::New, status: S::Live, date: None, note: "EUR CoinVertible. Euro stablecoin live." },
        Seed { name: "Barclays", ticker: None, domain: Some("barclays.com"), stablecoin_mcap_m: None, company_mcap_m: Some(1_500_000.0), category: C::TradFi, kind: K::New, status: S::Building, date: None, note: "Invested in Ubyx stablecoin settlement." },
        Seed { name: "BBVA", ticker: None, domain: Some("bbva.com"), stablecoin_mcap_m: None, company_mcap_m: Some(60_000.0), category: C::EuBanking, kind: K::New, status: S::Building, date: None, note: "Partnering with Visa on stablecoin. Strong LatAm presence." },
        Seed { name: "SoFi", ticker: Some("SoFiUSD"), domain: Some("sofi.com"), stablecoin_mcap_m: None, company_mcap_m: Some(31_000.0), category: C::Fintech, kind: K::New, status: S::Live, date: None, note: "SoFiUSD on Ethereum. 10M+ members." },
        Seed { name: "World Liberty", ticker: Some("USD1"), domain: Some("worldlibertyfinancial.com"), stablecoin_mcap_m: Some(3_400.0), company_mcap_m: None, category: C::PoliticalDefi, kind: K::New, status: S::Live, date: None, note: "Trump family venture. Fastest growing stablecoin." },
        Seed { name: "Sky", ticker: Some("USDS"), domain: Some("sky.money"), stablecoin_mcap_m: Some(8_960.0), company_mcap_m: None, category: C::DeFi, kind: K::Incumbent, status: S::Live, date: None, note: "USDS + DAI combined. Oldest decentralized stablecoin." },
        Seed { name: "Ethena", ticker: Some("USDe"), domain: Some("ethena.fi"), stablecoin_mcap_m: Some(5_365.0), company_mcap_m: None, category: C::DeFi, kind: K::New, status: S::Live, date: None, note: "Synthetic dollar, delta-neutral. 4th largest stablecoin." },
        Seed { name: "Ripple", ticker: Some("RLUSD"), domain: Some("ripple.com"), stablecoin_mcap_m: Some(493.0), company_mcap_m: None, category: C::Crypto, kind: K::New, status: S::Live, date: None, note: "Cross-border settlement via RippleNet." },
    ];
    seeds.into_iter().map(PipelineEntry::from).collect()
}
