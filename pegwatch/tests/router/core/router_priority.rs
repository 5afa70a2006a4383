use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use pegwatch::{PegError, Pegwatch};

use crate::helpers::{MockConnector, pegged};

#[tokio::test]
async fn first_registered_connector_wins() {
    let first = MockConnector::builder()
        .name("first")
        .returns_assets_ok(vec![pegged("1", "FIRST", 1.0)])
        .build();
    let second = MockConnector::builder()
        .name("second")
        .returns_assets_ok(vec![pegged("1", "SECOND", 1.0)])
        .build();

    let pw = Pegwatch::builder()
        .with_connector(first)
        .with_connector(second)
        .build()
        .unwrap();

    assert_eq!(pw.pegged_assets().await.unwrap()[0].symbol, "FIRST");
}

#[tokio::test]
async fn falls_back_to_next_connector_on_failure() {
    let broken = MockConnector::builder()
        .name("broken")
        .with_assets_fn(|| Err(PegError::http("broken", 503, "stablecoin listing")))
        .build();
    let healthy = MockConnector::builder()
        .name("healthy")
        .returns_assets_ok(vec![pegged("2", "USDC", 5.0)])
        .build();

    let pw = Pegwatch::builder()
        .with_connector(broken)
        .with_connector(healthy)
        .build()
        .unwrap();

    let assets = pw.pegged_assets().await.unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].symbol, "USDC");
}

#[tokio::test]
async fn falls_back_after_provider_timeout() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_millis(200))
        .returns_assets_ok(vec![pegged("1", "SLOW", 1.0)])
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .returns_assets_ok(vec![pegged("1", "FAST", 1.0)])
        .build();

    let pw = Pegwatch::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    assert_eq!(pw.pegged_assets().await.unwrap()[0].symbol, "FAST");
}

#[tokio::test]
async fn stops_at_first_success() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let first = MockConnector::builder()
        .name("first")
        .returns_assets_ok(vec![pegged("1", "USDT", 1.0)])
        .build();
    let second = MockConnector::builder()
        .name("second")
        .with_assets_fn(move || {
            counted.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        })
        .build();

    let pw = Pegwatch::builder()
        .with_connector(first)
        .with_connector(second)
        .build()
        .unwrap();

    pw.pegged_assets().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn skips_connectors_without_capability() {
    let history_only = MockConnector::builder()
        .name("history_only")
        .returns_history_ok(vec![])
        .build();
    let assets = MockConnector::builder()
        .name("assets")
        .returns_assets_ok(vec![pegged("1", "USDT", 1.0)])
        .build();

    let pw = Pegwatch::builder()
        .with_connector(history_only)
        .with_connector(assets)
        .build()
        .unwrap();

    assert_eq!(pw.pegged_assets().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unsupported_when_no_connector_has_capability() {
    let c = MockConnector::builder()
        .name("history_only")
        .returns_history_ok(vec![])
        .build();
    let pw = Pegwatch::builder().with_connector(c).build().unwrap();

    let err = pw.total_supply().await.unwrap_err();
    assert!(matches!(err, PegError::Unsupported { ref capability } if capability == "total-supply"));
    assert!(!err.is_actionable());
}
