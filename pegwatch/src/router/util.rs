use std::time::Duration;

use pegwatch_core::{Capability, PegError};

/// One routed connector call: which endpoint, and for which asset.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Route<'a> {
    Assets,
    History { asset_id: &'a str },
    TotalSupply,
}

impl Route<'_> {
    pub(crate) const fn capability(self) -> Capability {
        match self {
            Self::Assets => Capability::Assets,
            Self::History { .. } => Capability::History,
            Self::TotalSupply => Capability::TotalSupply,
        }
    }

    /// Final error once every connector eligible for this route has been tried.
    ///
    /// Only a history lookup collapses to `NotFound`: an id unknown to every
    /// connector is a property of the id. The listing and the aggregate chart
    /// always exist upstream, so a not-found answer there stays a failure.
    pub(crate) fn exhausted(self, attempted_any: bool, errors: Vec<PegError>) -> PegError {
        let capability = self.capability();
        if !attempted_any {
            return PegError::unsupported(capability.as_str());
        }
        if errors.is_empty() {
            return PegError::AllProvidersFailed(errors);
        }
        if errors
            .iter()
            .all(|e| matches!(e, PegError::ProviderTimeout { .. }))
        {
            return PegError::AllProvidersTimedOut {
                capability: capability.to_string(),
            };
        }
        if let Self::History { asset_id } = self
            && errors.iter().all(|e| matches!(e, PegError::NotFound { .. }))
        {
            return PegError::not_found(format!("history for {asset_id}"));
        }
        PegError::AllProvidersFailed(errors)
    }
}

/// Run every history lookup of a supply table concurrently, results in input order.
///
/// With a deadline, the whole batch fails with `RequestTimeout("history")` once it
/// elapses; lookups still in flight are dropped.
pub(crate) async fn fetch_all_within<I, F, T>(
    lookups: I,
    deadline: Option<Duration>,
) -> Result<Vec<T>, PegError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = T>,
{
    let batch = futures::future::join_all(lookups);
    let Some(deadline) = deadline else {
        return Ok(batch.await);
    };
    tokio::time::timeout(deadline, batch)
        .await
        .map_err(|_| PegError::request_timeout(Capability::History.as_str()))
}
