use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::dto::{ChartPoint, StablecoinDetail, StablecoinList};
use pegwatch_types::PegError;

const CONNECTOR: &str = "pegwatch-llama";

/// Public API root used by [`LlamaConfig::default`].
pub const DEFAULT_BASE_URL: &str = "https://stablecoins.llama.fi";

/// HTTP settings for [`RealAdapter`].
#[derive(Debug, Clone)]
pub struct LlamaConfig {
    /// API root; endpoint paths are appended to it.
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for LlamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(20),
            user_agent: concat!("pegwatch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Stablecoin API abstraction (so we can inject fakes in tests).
#[async_trait]
pub trait LlamaApi: Send + Sync {
    /// `GET /stablecoins?includePrices=true`.
    async fn stablecoins(&self) -> Result<StablecoinList, PegError>;

    /// `GET /stablecoin/{id}`.
    async fn stablecoin(&self, id: &str) -> Result<StablecoinDetail, PegError>;

    /// `GET /stablecoincharts/all`.
    async fn total_chart(&self) -> Result<Vec<ChartPoint>, PegError>;
}

/// Real adapter backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    base: Url,
}

impl RealAdapter {
    /// Build an HTTP client from `cfg`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL does not parse or cannot carry a
    /// path, and `Connector` if the HTTP client cannot be built.
    pub fn new(cfg: &LlamaConfig) -> Result<Self, PegError> {
        let base = Url::parse(&cfg.base_url)
            .map_err(|e| PegError::InvalidArg(format!("base url {}: {e}", cfg.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(PegError::InvalidArg(format!(
                "base url {} cannot carry a path",
                cfg.base_url
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .user_agent(cfg.user_agent.clone())
            .build()
            .map_err(|e| PegError::connector(CONNECTOR, e.to_string()))?;
        Ok(Self { http, base })
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn with_client(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base URLs, so the segments are always writable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T>(&self, url: Url, context: &str) -> Result<T, PegError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "stablecoin api request");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| map_http_err(&e, context))?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PegError::not_found(context.to_string()));
        }
        if !status.is_success() {
            return Err(PegError::http(CONNECTOR, status.as_u16(), context));
        }
        let body = resp.bytes().await.map_err(|e| map_http_err(&e, context))?;
        serde_json::from_slice(&body).map_err(|e| PegError::Data(format!("{context}: {e}")))
    }
}

fn map_http_err(e: &reqwest::Error, context: &str) -> PegError {
    if e.is_timeout() {
        PegError::connector(CONNECTOR, format!("timeout: {context}"))
    } else {
        PegError::connector(CONNECTOR, format!("{context}: {e}"))
    }
}

#[async_trait]
impl LlamaApi for RealAdapter {
    async fn stablecoins(&self) -> Result<StablecoinList, PegError> {
        let mut url = self.endpoint(&["stablecoins"]);
        url.query_pairs_mut().append_pair("includePrices", "true");
        self.get_json(url, "stablecoin listing").await
    }

    async fn stablecoin(&self, id: &str) -> Result<StablecoinDetail, PegError> {
        let url = self.endpoint(&["stablecoin", id]);
        self.get_json(url, &format!("history for {id}")).await
    }

    async fn total_chart(&self) -> Result<Vec<ChartPoint>, PegError> {
        let url = self.endpoint(&["stablecoincharts", "all"]);
        self.get_json(url, "total supply chart").await
    }
}
