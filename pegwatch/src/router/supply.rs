use pegwatch_core::SeriesPoint;

use crate::Pegwatch;
use crate::pegwatch_router_method;
use crate::router::util::Route;

impl Pegwatch {
    pegwatch_router_method! {
        /// Fetch the aggregate circulating supply across all stablecoins.
        method: total_supply() -> Vec<SeriesPoint>,
        accessor: as_total_supply_provider,
        route: Route::TotalSupply,
        call: total_supply()
    }
}
