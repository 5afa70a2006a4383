use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong while fetching stablecoin data.
///
/// Failures come from three places: a bad builder or reference-table input,
/// a single connector talking to its upstream API, or the orchestrator giving
/// up after every eligible connector was tried. The analytics in
/// `pegwatch-core` are total and never produce this type.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PegError {
    /// Rejected input: an empty asset id, an unusable base URL, `top_n == 0`.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A payload that could not be decoded, such as a listing served as HTML
    /// or a reference table with the wrong schema.
    #[error("data issue: {0}")]
    Data(String),

    /// The upstream API answered with a non-success status other than 404.
    #[error("{connector} returned HTTP {status} for {what}")]
    Http {
        /// Connector that issued the request.
        connector: String,
        /// Status code of the response.
        status: u16,
        /// What was being fetched, e.g. "stablecoin listing".
        what: String,
    },

    /// Transport-level failure of one connector (DNS, TLS, reset, client setup).
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name.
        connector: String,
        /// Error text from the transport.
        msg: String,
    },

    /// The upstream does not know the requested asset.
    #[error("not found: {what}")]
    NotFound {
        /// What was missing, e.g. "history for 1".
        what: String,
    },

    /// No registered connector serves this capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label: "assets", "history" or "total-supply".
        capability: String,
    },

    /// One connector did not answer within the per-provider timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector that was cut off.
        connector: String,
        /// Capability label of the call.
        capability: String,
    },

    /// The history fan-out did not finish within the request deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label of the bounded request.
        capability: String,
    },

    /// Every attempted connector hit its per-provider timeout.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label of the call.
        capability: String,
    },

    /// Every attempted connector failed; one entry per attempt, in attempt order.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<PegError>),
}

impl PegError {
    /// No connector offers `capability`.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// Transport failure tagged with the connector name.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Non-success status from the upstream API.
    pub fn http(connector: impl Into<String>, status: u16, what: impl Into<String>) -> Self {
        Self::Http {
            connector: connector.into(),
            status,
            what: what.into(),
        }
    }

    /// Unknown asset or resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Per-provider timeout for one connector call.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Request deadline elapsed for `capability`.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Whether a dashboard should show this failure to the operator.
    ///
    /// An unknown asset id or a capability no connector offers is a quiet
    /// condition: the widget is simply left out. Bad statuses, undecodable
    /// listings and timeouts are not. An aggregate is actionable when any of
    /// its attempts is.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::Unsupported { .. } => false,
            Self::AllProvidersFailed(attempts) => attempts.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Per-connector failures with every `AllProvidersFailed` layer removed.
    ///
    /// A `supply_table` failure may wrap the history aggregate of one asset;
    /// this yields the individual HTTP, decode and not-found errors beneath it.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(attempts) => {
                attempts.into_iter().flat_map(Self::flatten).collect()
            }
            other => vec![other],
        }
    }
}

impl From<serde_json::Error> for PegError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
