use std::sync::Arc;
use std::time::Duration;

use roboscreen::Screener;
use roboscreen_core::connector::ScreenerConnector;
use roboscreen_mock::MockConnector;
use roboscreen_yfinance::YfConnector;

// Mock in CI when ROBOSCREEN_DEMOS_USE_MOCK is set, Yahoo Finance otherwise.
fn get_connector() -> Arc<dyn ScreenerConnector> {
    if std::env::var("ROBOSCREEN_DEMOS_USE_MOCK").is_ok() {
        Arc::new(MockConnector::new())
    } else {
        Arc::new(YfConnector::new_default())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let screener = Arc::new(
        Screener::builder()
            .with_connector(get_connector())
            .refresh_interval(Duration::from_secs(90))
            .build()?,
    );

    let (handle, mut rx) = screener.spawn_refresh();

    // First table arrives immediately, before the first full interval.
    rx.changed().await?;
    print_summary(&rx.borrow_and_update());

    // Ask for an out-of-cadence refresh, as a UI refresh button would.
    handle.trigger();
    rx.changed().await?;
    print_summary(&rx.borrow_and_update());

    handle.stop().await;
    Ok(())
}

fn print_summary(table: &roboscreen::QuoteTable) {
    let priced = table.iter().filter(|r| r.live_price.is_some()).count();
    println!("refreshed {} rows, {} priced", table.len(), priced);
}
