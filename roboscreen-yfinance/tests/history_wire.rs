use httpmock::prelude::*;
use std::str::FromStr;

use roboscreen_core::connector::HistoryProvider;
use roboscreen_core::{HistoryRequest, Interval, Range, ScreenerError, Symbol};
use roboscreen_yfinance::YfConnector;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[tokio::test]
async fn chart_parses_daily_closes() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v8/finance/chart/ISRG")
                .query_param("range", "5d")
                .query_param("interval", "1d");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{"chart":{"result":[{"timestamp":[1704153600,1704240000,1704326400],
                        "indicators":{"quote":[{
                            "open":[488.0,495.5,501.0],
                            "high":[492.0,502.0,507.0],
                            "low":[487.0,494.0,499.5],
                            "close":[490.0,500.0,505.0],
                            "volume":[1000000,1100000,900000]}]}}],
                        "error":null}}"#,
                );
        })
        .await;

    let yf = YfConnector::with_base_url(server.base_url());
    let hist = yf
        .history(&Symbol::new("ISRG"), HistoryRequest::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(hist.len(), 3);
    assert_eq!(hist.closes(), vec![d("490"), d("500"), d("505")]);
    assert_eq!(hist.candles[0].volume, Some(1_000_000));
}

#[tokio::test]
async fn chart_requests_the_configured_range() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v8/finance/chart/NVDA")
                .query_param("range", "1mo")
                .query_param("interval", "1d");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{"chart":{"result":[{"timestamp":[1704153600],
                        "indicators":{"quote":[{
                            "open":[990.0],"high":[1005.0],"low":[985.0],
                            "close":[1000.0],"volume":[2000000]}]}}],
                        "error":null}}"#,
                );
        })
        .await;

    let yf = YfConnector::with_base_url(server.base_url());
    let req = HistoryRequest {
        range: Range::M1,
        interval: Interval::D1,
    };
    let hist = yf.history(&Symbol::new("NVDA"), req).await.unwrap();

    mock.assert_async().await;
    assert_eq!(hist.closes(), vec![d("1000")]);
}

#[tokio::test]
async fn chart_drops_bars_with_null_close() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v8/finance/chart/ARBE");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{"chart":{"result":[{"timestamp":[1704153600,1704240000,1704326400],
                        "indicators":{"quote":[{
                            "open":[2.1,null,1.95],
                            "high":[2.2,null,2.0],
                            "low":[2.0,null,1.9],
                            "close":[2.1,null,1.95],
                            "volume":[500000,null,450000]}]}}],
                        "error":null}}"#,
                );
        })
        .await;

    let yf = YfConnector::with_base_url(server.base_url());
    let hist = yf
        .history(&Symbol::new("ARBE"), HistoryRequest::default())
        .await
        .unwrap();

    assert_eq!(hist.len(), 2);
    assert_eq!(hist.closes(), vec![d("2.1"), d("1.95")]);
}

#[tokio::test]
async fn chart_error_envelope_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v8/finance/chart/FAKE123");
            then.status(404)
                .header("content-type", "application/json")
                .body(
                    r#"{"chart":{"result":null,
                        "error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
                );
        })
        .await;

    let yf = YfConnector::with_base_url(server.base_url());
    let err = yf
        .history(&Symbol::new("FAKE123"), HistoryRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ScreenerError::NotFound { .. }));
}

#[tokio::test]
async fn chart_server_error_is_tagged_connector() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v8/finance/chart/ISRG");
            then.status(500).body("upstream exploded");
        })
        .await;

    let yf = YfConnector::with_base_url(server.base_url());
    let err = yf
        .history(&Symbol::new("ISRG"), HistoryRequest::default())
        .await
        .unwrap_err();

    match err {
        ScreenerError::Connector { connector, .. } => {
            assert_eq!(connector, "roboscreen-yfinance");
        }
        other => panic!("unexpected: {other:?}"),
    }
}
