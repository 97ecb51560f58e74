use std::str::FromStr;

use roboscreen_core::connector::{
    HistoryProvider, MarketInfoProvider, QuoteProvider, ScreenerConnector,
};
use roboscreen_core::{HistoryRequest, ScreenerError, Symbol};
use roboscreen_mock::MockConnector;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[tokio::test]
async fn known_symbol_has_all_capabilities() {
    let mock = MockConnector::new();
    let sym = Symbol::new("ISRG");

    let hist = mock
        .history(&sym, HistoryRequest::default())
        .await
        .unwrap();
    assert_eq!(hist.len(), 3);
    assert_eq!(hist.closes().last().copied(), Some(d("505.00")));

    let quote = mock.quote(&sym).await.unwrap();
    assert_eq!(quote.price, Some(d("510.00")));

    let info = mock.market_info(&sym).await.unwrap();
    assert_eq!(info.regular_market_price, Some(d("510.00")));
}

#[tokio::test]
async fn unknown_symbol_is_not_found_everywhere() {
    let mock = MockConnector::new();
    let sym = Symbol::new("FAKE123");

    assert!(matches!(
        mock.history(&sym, HistoryRequest::default()).await,
        Err(ScreenerError::NotFound { .. })
    ));
    assert!(matches!(
        mock.quote(&sym).await,
        Err(ScreenerError::NotFound { .. })
    ));
    assert!(matches!(
        mock.market_info(&sym).await,
        Err(ScreenerError::NotFound { .. })
    ));
}

#[tokio::test]
async fn fail_symbol_forces_connector_errors() {
    let mock = MockConnector::new();
    let sym = Symbol::new("FAIL");

    match mock.quote(&sym).await {
        Err(ScreenerError::Connector { connector, .. }) => {
            assert_eq!(connector, "roboscreen-mock");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn noquote_only_answers_via_market_info() {
    let mock = MockConnector::new();
    let sym = Symbol::new("NOQUOTE");

    assert!(mock.quote(&sym).await.is_err());
    let info = mock.market_info(&sym).await.unwrap();
    assert_eq!(info.regular_market_price, Some(d("110.00")));
}

#[test]
fn advertises_all_capabilities() {
    let mock = MockConnector::new();
    assert!(mock.as_history_provider().is_some());
    assert!(mock.as_quote_provider().is_some());
    assert!(mock.as_market_info_provider().is_some());
    assert_eq!(mock.name(), "roboscreen-mock");
}
