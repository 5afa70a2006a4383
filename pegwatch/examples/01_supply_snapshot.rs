mod common;
use common::{get_connector, init_tracing};
use pegwatch::{FlowPeriod, Pegwatch};
use pegwatch_core::format::{
    format_billions, format_date_label, format_holdings_billions, format_signed_billions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Create connector (mock in CI when PEGWATCH_EXAMPLES_USE_MOCK is set).
    let connector = get_connector();

    // 2. Build the orchestrator and register the connector.
    let pw = Pegwatch::builder()
        .with_connector(connector)
        .top_n(8)
        .request_timeout(std::time::Duration::from_secs(30))
        .build()?;

    // 3. Fetch everything the dashboard renders.
    let snapshot = pw.snapshot(chrono::Utc::now()).await?;
    let table = &snapshot.table;

    if let (Some(first), Some(last)) = (table.rows.first(), table.rows.last()) {
        println!(
            "{} assets, {} days ({} .. {})",
            table.assets.len(),
            table.rows.len(),
            format_date_label(first.timestamp),
            format_date_label(last.timestamp),
        );
    }

    // 4. Headline numbers per chart window.
    for s in &snapshot.summaries {
        println!(
            "{:>4}: {} ({:+.1}% {})",
            s.range.label(),
            format_billions(s.latest_total),
            s.change_percent,
            s.period_label
        );
    }

    // 5. Net flows over 30 days.
    if let Some(report) = snapshot
        .net_flows
        .iter()
        .find(|r| r.period == FlowPeriod::D30)
    {
        println!("\nNet flows ({}): {}", report.period.label(), format_signed_billions(report.total_flow));
        for e in &report.entries {
            println!("  {:<6} {}", e.symbol, format_signed_billions(e.flow));
        }
    }

    // 6. Treasury comparison.
    println!(
        "\nStablecoin issuers hold {} in treasuries (#{} among holders)",
        format_holdings_billions(snapshot.treasury_total),
        snapshot.stablecoin_rank
    );

    Ok(())
}
