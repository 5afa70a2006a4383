#![allow(dead_code)]

use pegwatch::PegConnector;
use std::sync::Arc;

#[must_use]
pub fn get_connector() -> Arc<dyn PegConnector> {
    if std::env::var("PEGWATCH_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        return Arc::new(pegwatch_mock::MockConnector::new());
    }
    match pegwatch_llama::LlamaConnector::try_default() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            println!("--- (DefiLlama connector unavailable: {e}; using mock) ---");
            Arc::new(pegwatch_mock::MockConnector::new())
        }
    }
}

/// Install a fmt subscriber honoring `RUST_LOG` (defaults to `info`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
