use std::sync::Arc;

use roboscreen::{CapTier, ChangeSign, Screener, classify};
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

    let screener = Screener::builder().with_connector(get_connector()).build()?;

    for tier in CapTier::all() {
        let table = screener.tier_table(tier).await;
        println!("\n== {} ==", tier.label());
        for row in table.iter() {
            let sign = match classify(row.percent_change) {
                ChangeSign::Positive => "+",
                ChangeSign::Negative => "-",
                ChangeSign::Flat => " ",
            };
            println!(
                "{sign} {:<6} {:<45} prev {:>10} live {:>10} pct {:>8}",
                row.symbol.as_str(),
                row.name.as_deref().unwrap_or(""),
                fmt(row.previous_close),
                fmt(row.live_price),
                fmt(row.percent_change),
            );
        }
    }

    Ok(())
}

fn fmt(v: Option<rust_decimal::Decimal>) -> String {
    v.map_or_else(String::new, |d| d.to_string())
}
