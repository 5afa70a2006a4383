use std::collections::HashSet;

use proptest::prelude::*;

use crate::helpers::{MockConnector, pegged};
use pegwatch::Pegwatch;
use pegwatch_core::PeggedAsset;

fn arb_listing() -> impl Strategy<Value = Vec<PeggedAsset>> {
    // A small symbol alphabet so duplicate symbols show up often.
    let entry = (
        prop::sample::select(vec!["USDT", "USDC", "DAI", "USDe", "FDUSD", "PYUSD"]),
        0.0f64..1e11,
    );
    proptest::collection::vec(entry, 0..24).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (symbol, usd))| pegged(&(i + 1).to_string(), symbol, usd))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn top_assets_ranks_any_listing(listing in arb_listing(), top_n in 1usize..8) {
        let listed = listing.clone();
        let out = tokio_test::block_on(async move {
            let c = MockConnector::builder().returns_assets_ok(listing).build();
            let pw = Pegwatch::builder()
                .with_connector(c)
                .top_n(top_n)
                .build()
                .expect("pegwatch");
            pw.top_assets().await.expect("top assets")
        });

        prop_assert!(out.len() <= top_n);

        let symbols: HashSet<&str> = out.iter().map(|a| a.symbol.as_str()).collect();
        prop_assert_eq!(symbols.len(), out.len());

        for pair in out.windows(2) {
            prop_assert!(pair[0].current_supply >= pair[1].current_supply);
        }

        // Each kept symbol carries the largest supply listed for it.
        for a in &out {
            let best = listed
                .iter()
                .filter(|p| p.symbol == a.symbol)
                .map(|p| p.circulating_usd)
                .fold(f64::MIN, f64::max);
            prop_assert_eq!(a.current_supply, best);
        }

        let distinct: HashSet<&str> = listed.iter().map(|p| p.symbol.as_str()).collect();
        prop_assert_eq!(out.len(), distinct.len().min(top_n));
    }
}
