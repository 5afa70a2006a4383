use std::time::Duration;

use pegwatch::{FetchStrategy, PegError, Pegwatch};

use crate::helpers::{MockConnector, pegged};

#[tokio::test]
async fn strategy_latency_returns_fastest_success() {
    let fast_ok = MockConnector::builder()
        .name("fast")
        .delay(Duration::from_millis(10))
        .returns_assets_ok(vec![pegged("1", "FAST", 11.0)])
        .build();
    let slow_ok = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_millis(100))
        .returns_assets_ok(vec![pegged("1", "SLOW", 99.0)])
        .build();

    let pw = Pegwatch::builder()
        .with_connector(slow_ok)
        .with_connector(fast_ok)
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();

    let assets = pw.pegged_assets().await.unwrap();
    assert_eq!(assets[0].symbol, "FAST");
}

#[tokio::test]
async fn strategy_latency_ignores_faster_failure_and_returns_first_success() {
    let fast_fail = MockConnector::builder()
        .name("fast_fail")
        .delay(Duration::from_millis(5))
        .with_assets_fn(|| Err(PegError::http("fast_fail", 502, "stablecoin listing")))
        .build();
    let slow_ok = MockConnector::builder()
        .name("slow_ok")
        .delay(Duration::from_millis(20))
        .returns_assets_ok(vec![pegged("1", "OK", 77.0)])
        .build();

    let pw = Pegwatch::builder()
        .with_connector(fast_fail)
        .with_connector(slow_ok)
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();

    let assets = pw.pegged_assets().await.unwrap();
    assert_eq!(assets[0].symbol, "OK");
}

#[tokio::test]
async fn strategy_latency_all_fail_aggregates_tagged_errors() {
    let a = MockConnector::builder()
        .name("a")
        .with_assets_fn(|| Err(PegError::Data("bad payload".into())))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .with_assets_fn(|| Err(PegError::connector("b", "status 500")))
        .build();

    let pw = Pegwatch::builder()
        .with_connector(a)
        .with_connector(b)
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();

    let err = pw.pegged_assets().await.unwrap_err();
    let PegError::AllProvidersFailed(errors) = err else {
        panic!("expected AllProvidersFailed, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| matches!(
        e,
        PegError::Connector { connector, msg } if connector == "a" && msg.contains("bad payload")
    )));
}

#[tokio::test]
async fn provider_timeout_applies_in_both_strategies() {
    for strategy in [FetchStrategy::PriorityWithFallback, FetchStrategy::Latency] {
        let slow = MockConnector::builder()
            .name("slow")
            .delay(Duration::from_millis(200))
            .returns_assets_ok(vec![pegged("1", "USDT", 1.0)])
            .build();
        let pw = Pegwatch::builder()
            .with_connector(slow)
            .fetch_strategy(strategy)
            .provider_timeout(Duration::from_millis(20))
            .build()
            .unwrap();

        let err = pw.pegged_assets().await.unwrap_err();
        assert!(
            matches!(err, PegError::AllProvidersTimedOut { ref capability } if capability == "assets"),
            "{strategy:?}: {err:?}"
        );
    }
}
