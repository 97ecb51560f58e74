use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use roboscreen::{Screener, ScreenerError, Symbol};
use roboscreen_core::connector::{QuoteProvider, ScreenerConnector};
use roboscreen_core::Quote;
use roboscreen_mock::MockConnector;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn screener() -> Screener {
    Screener::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn market_info_price_backstops_a_missing_quote() {
    let s = screener();
    let table = s.fetch_quotes(&[Symbol::new("NOQUOTE")]).await;
    let row = &table.rows[0];

    // History gives prev 100.00; the quote interface has nothing, so the
    // regular market price (110.00) backs the live field.
    assert_eq!(row.previous_close, Some(d("100.00")));
    assert_eq!(row.live_price, Some(d("110.00")));
    assert_eq!(row.percent_change, Some(d("10.00")));
}

#[tokio::test]
async fn both_live_paths_failing_blanks_price_and_change() {
    let s = screener();
    let table = s.fetch_quotes(&[Symbol::new("NOLIVE")]).await;
    let row = &table.rows[0];

    assert_eq!(row.previous_close, Some(d("50.00")));
    assert_eq!(row.live_price, None);
    assert_eq!(row.percent_change, None);
}

#[tokio::test]
async fn forced_failure_degrades_to_a_blank_row() {
    let s = screener();
    let table = s
        .fetch_quotes(&[Symbol::new("FAIL"), Symbol::new("NVDA")])
        .await;

    let fail = &table.rows[0];
    assert_eq!(fail.previous_close, None);
    assert_eq!(fail.live_price, None);
    assert_eq!(fail.percent_change, None);

    // The neighbour is untouched by the failure.
    let nvda = &table.rows[1];
    assert_eq!(nvda.live_price, Some(d("1010.00")));
    assert_eq!(nvda.percent_change, Some(d("2.00")));
}

struct AlwaysErr;

impl ScreenerConnector for AlwaysErr {
    fn name(&self) -> &'static str {
        "always-err"
    }
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl QuoteProvider for AlwaysErr {
    async fn quote(&self, _symbol: &Symbol) -> Result<Quote, ScreenerError> {
        Err(ScreenerError::connector("always-err", "wire failure"))
    }
}

#[tokio::test]
async fn second_connector_backstops_the_first() {
    let s = Screener::builder()
        .with_connector(Arc::new(AlwaysErr))
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();

    let quote = s.quote(&Symbol::new("ISRG")).await.unwrap();
    assert_eq!(quote.price, Some(d("510.00")));
}

#[tokio::test]
async fn all_connectors_failing_aggregates_errors() {
    let s = Screener::builder()
        .with_connector(Arc::new(AlwaysErr))
        .build()
        .unwrap();

    let err = s.quote(&Symbol::new("ISRG")).await.unwrap_err();
    match err {
        ScreenerError::AllProvidersFailed(inner) => {
            assert_eq!(inner.len(), 1);
            assert!(matches!(inner[0], ScreenerError::Connector { .. }));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

// A connector fronting its own multi-provider stack reports an aggregate.
struct NestedErr;

impl ScreenerConnector for NestedErr {
    fn name(&self) -> &'static str {
        "nested-err"
    }
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl QuoteProvider for NestedErr {
    async fn quote(&self, _symbol: &Symbol) -> Result<Quote, ScreenerError> {
        Err(ScreenerError::AllProvidersFailed(vec![
            ScreenerError::connector("inner-a", "wire failure"),
            ScreenerError::not_found("quote for ISRG"),
        ]))
    }
}

#[tokio::test]
async fn aggregates_from_a_connector_stay_flat() {
    let s = Screener::builder()
        .with_connector(Arc::new(NestedErr))
        .build()
        .unwrap();

    let err = s.quote(&Symbol::new("ISRG")).await.unwrap_err();
    match err {
        ScreenerError::AllProvidersFailed(inner) => {
            assert_eq!(inner.len(), 2);
            assert!(
                inner
                    .iter()
                    .all(|e| !matches!(e, ScreenerError::AllProvidersFailed(_)))
            );
        }
        other => panic!("unexpected: {other:?}"),
    }
}

struct Bare;

impl ScreenerConnector for Bare {
    fn name(&self) -> &'static str {
        "bare"
    }
}

#[tokio::test]
async fn missing_capability_everywhere_is_unsupported() {
    let s = Screener::builder()
        .with_connector(Arc::new(Bare))
        .build()
        .unwrap();

    let err = s.quote(&Symbol::new("ISRG")).await.unwrap_err();
    assert!(matches!(err, ScreenerError::Unsupported { .. }));
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let s = screener();
    let err = s.quote(&Symbol::new("FAKE123")).await.unwrap_err();
    assert!(matches!(err, ScreenerError::NotFound { .. }));
    assert!(!err.is_actionable());
}
