use std::sync::Arc;
use std::time::Duration;

use pegwatch::{FetchStrategy, PegError, Pegwatch};
use pegwatch_mock::MockConnector as FixtureConnector;

use crate::helpers::{MockConnector, points};

#[tokio::test]
async fn history_not_found_when_every_connector_misses() {
    for strategy in [FetchStrategy::PriorityWithFallback, FetchStrategy::Latency] {
        let a = MockConnector::builder()
            .name("a")
            .with_history_fn(|id| Err(PegError::not_found(format!("stablecoin {id}"))))
            .build();
        let b = MockConnector::builder()
            .name("b")
            .with_history_fn(|id| Err(PegError::not_found(format!("pegged asset {id}"))))
            .build();

        let pw = Pegwatch::builder()
            .with_connector(a)
            .with_connector(b)
            .fetch_strategy(strategy)
            .build()
            .unwrap();

        let err = pw.history("999").await.unwrap_err();
        match err {
            PegError::NotFound { what } => assert_eq!(what, "history for 999"),
            other => panic!("{strategy:?}: unexpected {other:?}"),
        }
    }
}

#[tokio::test]
async fn history_not_found_then_success_falls_back() {
    let missing = MockConnector::builder()
        .name("missing")
        .with_history_fn(|id| Err(PegError::not_found(format!("stablecoin {id}"))))
        .build();
    let found = MockConnector::builder()
        .name("found")
        .returns_history_ok(points(&[(100, 1.0)]))
        .build();

    let pw = Pegwatch::builder()
        .with_connector(missing)
        .with_connector(found)
        .build()
        .unwrap();

    let h = pw.history("1").await.unwrap();
    assert_eq!(h.id, "1");
    assert_eq!(h.points.len(), 1);
}

#[tokio::test]
async fn history_not_found_mixed_with_failure_is_all_failed() {
    let missing = MockConnector::builder()
        .name("missing")
        .with_history_fn(|id| Err(PegError::not_found(format!("stablecoin {id}"))))
        .build();
    let broken = MockConnector::builder()
        .name("broken")
        .with_history_fn(|_| Err(PegError::http("broken", 500, "history for 1")))
        .build();

    let pw = Pegwatch::builder()
        .with_connector(missing)
        .with_connector(broken)
        .build()
        .unwrap();

    let err = pw.history("1").await.unwrap_err();
    assert!(err.is_actionable());
    let flat = err.flatten();
    assert_eq!(flat.len(), 2);
    assert!(matches!(flat[0], PegError::NotFound { .. }));
}

#[tokio::test]
async fn history_all_providers_timed_out() {
    let pw = Pegwatch::builder()
        .with_connector(Arc::new(
            FixtureConnector::new().with_timeout_latency(Duration::from_millis(200)),
        ))
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let err = pw.history("TIMEOUT").await.unwrap_err();
    assert!(
        matches!(err, PegError::AllProvidersTimedOut { ref capability } if capability == "history"),
        "{err:?}"
    );
}

#[tokio::test]
async fn history_fixture_unknown_id_is_not_found() {
    let pw = Pegwatch::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let err = pw.history("does-not-exist").await.unwrap_err();
    assert!(matches!(err, PegError::NotFound { .. }));
}
