use std::sync::Arc;

use pegwatch::{PegError, Pegwatch};
use pegwatch_mock::{FIXTURE_DAYS, FIXTURE_END, MockConnector as FixtureConnector};

use crate::helpers::{MockConnector, points};

#[tokio::test]
async fn total_supply_from_fixture_connector() {
    let pw = Pegwatch::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let series = pw.total_supply().await.unwrap();
    assert_eq!(series.len(), usize::try_from(FIXTURE_DAYS).unwrap());
    assert_eq!(series.last().map(|p| p.timestamp), Some(FIXTURE_END));
}

#[tokio::test]
async fn total_supply_falls_back() {
    let broken = MockConnector::builder()
        .name("broken")
        .with_total_supply_fn(|| Err(PegError::http("broken", 503, "total supply")))
        .build();
    let healthy = MockConnector::builder()
        .name("healthy")
        .with_total_supply_fn(|| Ok(points(&[(0, 1.0), (86_400, 2.0)])))
        .build();

    let pw = Pegwatch::builder()
        .with_connector(broken)
        .with_connector(healthy)
        .build()
        .unwrap();

    let series = pw.total_supply().await.unwrap();
    assert_eq!(series.len(), 2);
}
