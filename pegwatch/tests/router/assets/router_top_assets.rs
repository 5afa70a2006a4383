use std::sync::Arc;

use pegwatch::{Color, Palette, Pegwatch};
use pegwatch_mock::MockConnector as FixtureConnector;

use crate::helpers::{MockConnector, pegged};

#[tokio::test]
async fn top_assets_sorted_by_supply_and_truncated() {
    let c = MockConnector::builder()
        .returns_assets_ok(vec![
            pegged("3", "DAI", 5.0),
            pegged("1", "USDT", 150.0),
            pegged("4", "FDUSD", 2.0),
            pegged("2", "USDC", 60.0),
        ])
        .build();
    let pw = Pegwatch::builder()
        .with_connector(c)
        .top_n(3)
        .build()
        .unwrap();

    let top = pw.top_assets().await.unwrap();
    let symbols: Vec<&str> = top.iter().map(|a| a.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["USDT", "USDC", "DAI"]);
    assert_eq!(top[0].current_supply, 150.0);
    assert_eq!(top[0].id, "1");
}

#[tokio::test]
async fn top_assets_colors_cycle_by_rank() {
    let c = MockConnector::builder()
        .returns_assets_ok(vec![
            pegged("1", "A", 3.0),
            pegged("2", "B", 2.0),
            pegged("3", "C", 1.0),
        ])
        .build();
    let palette = Palette {
        colors: vec![Color::new("#111111"), Color::new("#222222")],
    };
    let pw = Pegwatch::builder()
        .with_connector(c)
        .palette(palette)
        .build()
        .unwrap();

    let colors: Vec<String> = pw
        .top_assets()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.color.0)
        .collect();
    assert_eq!(colors, vec!["#111111", "#222222", "#111111"]);
}

#[tokio::test]
async fn top_assets_keeps_provider_order_on_ties() {
    let c = MockConnector::builder()
        .returns_assets_ok(vec![pegged("9", "ZZZ", 1.0), pegged("8", "AAA", 1.0)])
        .build();
    let pw = Pegwatch::builder().with_connector(c).build().unwrap();

    let top = pw.top_assets().await.unwrap();
    assert_eq!(top[0].symbol, "ZZZ");
    assert_eq!(top[1].symbol, "AAA");
}

#[tokio::test]
async fn top_assets_from_fixture_connector() {
    let pw = Pegwatch::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let top = pw.top_assets().await.unwrap();
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].symbol, "USDT");
    assert_eq!(top[1].symbol, "USDC");
    assert!(top.windows(2).all(|w| w[0].current_supply >= w[1].current_supply));
    assert!(top.iter().all(|a| a.symbol != "EURC"));
    assert_eq!(top[0].color, Palette::default().color_for(0));
}
