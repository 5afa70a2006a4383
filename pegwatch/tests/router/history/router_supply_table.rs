use std::sync::Arc;
use std::time::Duration;

use pegwatch::{FillPolicy, PegError, Pegwatch};
use pegwatch_mock::{FIXTURE_DAYS, FIXTURE_END, MockConnector as FixtureConnector};

use crate::helpers::{DAY, MockConnector, pegged, points};

fn two_asset_connector(delay: Duration) -> Arc<MockConnector> {
    MockConnector::builder()
        .name("two")
        .delay(delay)
        .returns_assets_ok(vec![pegged("2", "USDC", 60.0), pegged("1", "USDT", 150.0)])
        .with_history_fn(|id| {
            let pts = match id {
                "1" => points(&[(2 * DAY, 120.0), (0, 100.0), (DAY, 110.0)]),
                "2" => points(&[(0, 50.0), (2 * DAY, 60.0)]),
                other => return Err(PegError::not_found(format!("stablecoin {other}"))),
            };
            Ok(pegwatch::AssetHistory {
                id: id.to_string(),
                points: pts,
            })
        })
        .build()
}

#[tokio::test]
async fn supply_table_aligns_histories_with_zero_fill() {
    let pw = Pegwatch::builder()
        .with_connector(two_asset_connector(Duration::ZERO))
        .build()
        .unwrap();

    let table = pw.supply_table().await.unwrap();
    assert_eq!(table.symbols(), vec!["USDT", "USDC"]);

    let stamps: Vec<i64> = table.rows.iter().map(|r| r.timestamp).collect();
    assert_eq!(stamps, vec![0, DAY, 2 * DAY]);
    assert_eq!(table.rows[1].get("USDT"), 110.0);
    assert_eq!(table.rows[1].values.get("USDC"), Some(&0.0));
    assert_eq!(table.rows[2].total(), 180.0);
}

#[tokio::test]
async fn supply_table_carry_forward_fills_gaps() {
    let pw = Pegwatch::builder()
        .with_connector(two_asset_connector(Duration::ZERO))
        .fill_policy(FillPolicy::CarryForward)
        .build()
        .unwrap();

    let table = pw.supply_table().await.unwrap();
    assert_eq!(table.rows[1].get("USDC"), 50.0);
}

#[tokio::test]
async fn supply_table_fails_when_any_history_fails() {
    let c = MockConnector::builder()
        .returns_assets_ok(vec![pegged("1", "USDT", 150.0), pegged("2", "USDC", 60.0)])
        .with_history_fn(|id| match id {
            "2" => Err(PegError::http("mock", 502, "history for 2")),
            _ => Ok(pegwatch::AssetHistory {
                id: id.to_string(),
                points: points(&[(0, 1.0)]),
            }),
        })
        .build();
    let pw = Pegwatch::builder().with_connector(c).build().unwrap();

    let err = pw.supply_table().await.unwrap_err();
    assert!(matches!(err, PegError::AllProvidersFailed(_)), "{err:?}");
}

#[tokio::test]
async fn supply_table_request_deadline_maps_to_history_timeout() {
    let pw = Pegwatch::builder()
        .with_connector(two_asset_connector(Duration::from_millis(30)))
        .provider_timeout(Duration::from_secs(1))
        .request_timeout(Duration::from_millis(10))
        .build()
        .unwrap();

    // the deadline bounds the history fan-out only; each history takes 30ms
    let err = pw.supply_table().await.unwrap_err();
    assert!(
        matches!(err, PegError::RequestTimeout { ref capability } if capability == "history"),
        "{err:?}"
    );
}

#[tokio::test]
async fn supply_table_from_fixture_connector() {
    let pw = Pegwatch::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .top_n(5)
        .build()
        .unwrap();

    let table = pw.supply_table().await.unwrap();
    assert_eq!(table.assets.len(), 5);
    assert_eq!(table.rows.len(), usize::try_from(FIXTURE_DAYS).unwrap());
    assert!(table.rows.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert!(table.rows.iter().all(|r| r.values.len() == 5));

    let last = table.rows.last().unwrap();
    assert_eq!(last.timestamp, FIXTURE_END);
    for asset in &table.assets {
        crate::helpers::assert_close(last.get(&asset.symbol), asset.current_supply);
    }
}
