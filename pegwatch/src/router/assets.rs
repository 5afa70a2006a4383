use std::collections::HashSet;

use pegwatch_core::{AssetMeta, MergedRow, PegError, PeggedAsset};

use crate::Pegwatch;
use crate::pegwatch_router_method;
use crate::router::util::Route;

impl Pegwatch {
    pegwatch_router_method! {
        /// List every pegged asset known to the first connector that answers.
        ///
        /// Honors the builder's `FetchStrategy`. The listing is returned in provider
        /// order; see [`top_assets`](Self::top_assets) for the ranked view.
        method: pegged_assets() -> Vec<PeggedAsset>,
        accessor: as_assets_provider,
        route: Route::Assets,
        call: pegged_assets()
    }

    /// The `top_n` assets by circulating supply, largest first, colored by rank.
    ///
    /// Ties keep provider order. Only the first (largest) asset per symbol is kept
    /// so symbols stay unique in the supply table, and an asset listed under the
    /// symbol `date` is skipped since that key holds the row timestamp.
    ///
    /// # Errors
    /// Propagates the error from [`pegged_assets`](Self::pegged_assets).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "pegwatch::router", skip(self), fields(top_n = self.cfg.top_n))
    )]
    pub async fn top_assets(&self) -> Result<Vec<AssetMeta>, PegError> {
        let mut assets = self.pegged_assets().await?;
        assets.sort_by(|a, b| b.circulating_usd.total_cmp(&a.circulating_usd));
        Ok(rank_assets(assets, self.cfg.top_n, &self.cfg.palette))
    }
}

fn rank_assets(
    sorted: Vec<PeggedAsset>,
    top_n: usize,
    palette: &pegwatch_core::Palette,
) -> Vec<AssetMeta> {
    let mut seen: HashSet<String> = HashSet::new();
    sorted
        .into_iter()
        .filter(|a| a.symbol != MergedRow::DATE_KEY && seen.insert(a.symbol.clone()))
        .take(top_n)
        .enumerate()
        .map(|(i, a)| AssetMeta {
            id: a.id,
            symbol: a.symbol,
            name: a.name,
            color: palette.color_for(i),
            current_supply: a.circulating_usd,
        })
        .collect()
}
