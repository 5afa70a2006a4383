use std::sync::Arc;
use std::time::Duration;

use pegwatch_core::{FetchStrategy, PegConnector, PegError};
use pegwatch_types::{FillPolicy, PackConfig, Palette, PegwatchConfig, ReferenceData};

use crate::router::util::Route;

/// Orchestrator that routes requests across registered connectors and derives
/// dashboard reports from the results.
pub struct Pegwatch {
    pub(crate) connectors: Vec<Arc<dyn PegConnector>>,
    pub(crate) cfg: PegwatchConfig,
}

/// Builder for constructing a `Pegwatch` orchestrator with custom configuration.
pub struct PegwatchBuilder {
    connectors: Vec<Arc<dyn PegConnector>>,
    cfg: PegwatchConfig,
}

impl Default for PegwatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PegwatchBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Starts with no connectors; register at least one via [`with_connector`](Self::with_connector).
    /// Defaults track the top 10 assets, fetch with priority-with-fallback and a 5s
    /// provider timeout, zero-fill gaps and use the builtin reference tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: PegwatchConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is the priority order under
    /// [`FetchStrategy::PriorityWithFallback`]. Duplicates are not removed.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn PegConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: PegwatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the fetch strategy for multi-provider requests.
    ///
    /// - `PriorityWithFallback`: deterministic order, one provider at a time.
    /// - `Latency`: race every eligible provider and keep the first success.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for the history fan-out behind `supply_table`.
    ///
    /// When exceeded, returns a `RequestTimeout` error for the history capability.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Number of assets tracked in the supply table.
    #[must_use]
    pub const fn top_n(mut self, n: usize) -> Self {
        self.cfg.top_n = n;
        self
    }

    /// Gap policy used when aligning histories.
    #[must_use]
    pub const fn fill_policy(mut self, policy: FillPolicy) -> Self {
        self.cfg.fill_policy = policy;
        self
    }

    /// Colors assigned to tracked assets by rank.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.cfg.palette = palette;
        self
    }

    /// Bubble packer tuning and canvas size.
    #[must_use]
    pub const fn pack(mut self, pack: PackConfig) -> Self {
        self.cfg.pack = pack;
        self
    }

    /// Treasury, sovereign, legislation and pipeline tables.
    #[must_use]
    pub fn reference(mut self, reference: ReferenceData) -> Self {
        self.cfg.reference = reference;
        self
    }

    /// Build the `Pegwatch` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered, `top_n` is zero,
    /// or the pack radius bounds are inverted.
    pub fn build(self) -> Result<Pegwatch, PegError> {
        if self.connectors.is_empty() {
            return Err(PegError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.top_n == 0 {
            return Err(PegError::InvalidArg("top_n must be at least 1".to_string()));
        }
        let pack = &self.cfg.pack;
        if !(pack.min_radius.is_finite() && pack.max_radius.is_finite())
            || pack.min_radius < 0.0
            || pack.min_radius > pack.max_radius
        {
            return Err(PegError::InvalidArg(format!(
                "invalid radius bounds: min {} max {}",
                pack.min_radius, pack.max_radius
            )));
        }

        Ok(Pegwatch {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute an untagged provider error to the connector that raised it.
///
/// Errors that already name a connector, or that classify the attempt
/// (not found, timeouts, aggregates), pass through unchanged.
pub(crate) fn tag_err(connector: &str, e: PegError) -> PegError {
    match e {
        e @ (PegError::NotFound { .. }
        | PegError::ProviderTimeout { .. }
        | PegError::Connector { .. }
        | PegError::Http { .. }
        | PegError::RequestTimeout { .. }
        | PegError::AllProvidersTimedOut { .. }
        | PegError::AllProvidersFailed(_)) => e,
        other => PegError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Pegwatch {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pegwatch::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, PegError>
    where
        Fut: Future<Output = Result<T, PegError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(PegError::provider_timeout(connector_name, capability)))
    }

    /// Start building a new `Pegwatch` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let llama = Arc::new(pegwatch_llama::LlamaConnector::try_default()?);
    /// let mock = Arc::new(pegwatch_mock::MockConnector::new());
    ///
    /// let pw = pegwatch::Pegwatch::builder()
    ///     .with_connector(llama)
    ///     .with_connector(mock)
    ///     .top_n(8)
    ///     .fetch_strategy(pegwatch::FetchStrategy::PriorityWithFallback)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> PegwatchBuilder {
        PegwatchBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PegwatchConfig {
        &self.cfg
    }

    /// Registered connectors in priority order.
    pub(crate) fn ordered(&self) -> Vec<Arc<dyn PegConnector>> {
        self.connectors.clone()
    }

    /// Generic single-result fetch across connectors.
    ///
    /// - Honors `FetchStrategy::{PriorityWithFallback, Latency}`
    /// - Applies the per-provider timeout in both modes
    /// - Once every eligible connector has failed, the route decides the final
    ///   error: `Unsupported`, `AllProvidersTimedOut`, `NotFound` for an unknown
    ///   history id, otherwise `AllProvidersFailed`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pegwatch::core::fetch_single",
            skip(self, route, call),
            fields(capability = %route.capability()),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        route: Route<'_>,
        call: F,
    ) -> Result<T, PegError>
    where
        T: Send,
        F: Fn(Arc<dyn PegConnector>) -> Option<Fut> + Send,
        Fut: Future<Output = Result<T, PegError>> + Send,
    {
        match self.cfg.fetch_strategy {
            FetchStrategy::PriorityWithFallback => {
                self.fetch_single_priority_with_fallback(route, call)
                    .await
            }
            FetchStrategy::Latency => {
                self.fetch_single_latency(route, call).await
            }
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pegwatch::core::fetch_single_priority_with_fallback",
            skip(self, route, call),
            fields(capability = %route.capability()),
        )
    )]
    async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        route: Route<'_>,
        call: F,
    ) -> Result<T, PegError>
    where
        T: Send,
        F: Fn(Arc<dyn PegConnector>) -> Option<Fut> + Send,
        Fut: Future<Output = Result<T, PegError>> + Send,
    {
        let capability = route.capability();
        let mut attempted_any = false;
        let mut errors: Vec<PegError> = Vec::new();

        for c in self.ordered() {
            if let Some(fut) = call(c.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability.as_str(),
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ (PegError::NotFound { .. } | PegError::ProviderTimeout { .. })) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(connector = c.name(), error = %e, "falling back to next connector");
                        errors.push(e);
                    }
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(connector = c.name(), error = %e, "connector failed; falling back");
                        errors.push(tag_err(c.name(), e));
                    }
                }
            }
        }

        Err(route.exhausted(attempted_any, errors))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pegwatch::core::fetch_single_latency",
            skip(self, route, call),
            fields(capability = %route.capability()),
        )
    )]
    async fn fetch_single_latency<T, F, Fut>(
        &self,
        route: Route<'_>,
        call: F,
    ) -> Result<T, PegError>
    where
        T: Send,
        F: Fn(Arc<dyn PegConnector>) -> Option<Fut> + Send,
        Fut: Future<Output = Result<T, PegError>> + Send,
    {
        use futures::stream::{FuturesUnordered, StreamExt};

        let capability = route.capability();
        let mut futs = FuturesUnordered::new();
        let mut attempted_any = false;
        for c in self.ordered() {
            if let Some(fut) = call(c.clone()) {
                let name = c.name();
                let timeout = self.cfg.provider_timeout;
                futs.push(async move {
                    (
                        name,
                        Self::provider_call_with_timeout(name, capability.as_str(), timeout, fut)
                            .await,
                    )
                });
                attempted_any = true;
            }
        }

        let mut errors: Vec<PegError> = Vec::new();
        while let Some((name, res)) = futs.next().await {
            match res {
                Ok(v) => return Ok(v),
                Err(e @ (PegError::ProviderTimeout { .. } | PegError::NotFound { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        Err(route.exhausted(attempted_any, errors))
    }
}
