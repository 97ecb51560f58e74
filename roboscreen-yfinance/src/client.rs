//! Thin HTTP client over the Yahoo Finance endpoints.

use chrono::DateTime;
use roboscreen_core::{
    Candle, History, HistoryRequest, MarketInfo, Quote, ScreenerError, Symbol,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::model;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// HTTP client for the chart, quote, and quoteSummary endpoints.
#[derive(Debug, Clone)]
pub struct YfClient {
    http: reqwest::Client,
    base: String,
}

impl Default for YfClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl YfClient {
    /// Build a client against the given base URL. Tests point this at a
    /// local mock server; production uses [`YfClient::default`].
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build from an existing `reqwest::Client`, e.g. one with a proxy.
    pub fn with_http_client(http: reqwest::Client, base: impl Into<String>) -> Self {
        Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, ScreenerError> {
        tracing::debug!(%url, "yahoo request");
        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| ScreenerError::connector("roboscreen-yfinance", e.to_string()))?;
        let status = resp.status();
        if !status.is_success() && !status.is_client_error() {
            return Err(ScreenerError::connector(
                "roboscreen-yfinance",
                format!("http status {status}"),
            ));
        }
        // 4xx bodies still carry the JSON error envelope; parse and let the
        // caller inspect the embedded error object.
        resp.json::<T>()
            .await
            .map_err(|e| ScreenerError::Data(format!("malformed response: {e}")))
    }

    /// Fetch a trailing daily history window via the v8 chart endpoint.
    pub async fn chart(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<History, ScreenerError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval={}",
            self.base,
            symbol,
            req.range.as_str(),
            req.interval.as_str(),
        );
        let envelope: model::ChartEnvelope = self.get_json(url).await?;
        if let Some(err) = envelope.chart.error {
            return Err(ScreenerError::connector(
                "roboscreen-yfinance",
                err.message(),
            ));
        }
        let result = envelope
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| ScreenerError::not_found(format!("history for {symbol}")))?;
        Ok(build_history(&result))
    }

    /// Fetch the live quote via the v7 quote endpoint.
    pub async fn quote(&self, symbol: &Symbol) -> Result<Quote, ScreenerError> {
        let url = format!("{}/v7/finance/quote?symbols={}", self.base, symbol);
        let envelope: model::QuoteEnvelope = self.get_json(url).await?;
        if let Some(err) = envelope.quote_response.error {
            return Err(ScreenerError::connector(
                "roboscreen-yfinance",
                err.message(),
            ));
        }
        let raw = envelope
            .quote_response
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| ScreenerError::not_found(format!("quote for {symbol}")))?;
        Ok(Quote {
            symbol: Symbol::new(&raw.symbol),
            shortname: raw.short_name,
            price: raw.regular_market_price.and_then(Decimal::from_f64),
            previous_close: raw
                .regular_market_previous_close
                .and_then(Decimal::from_f64),
        })
    }

    /// Fetch the market-info record via the v10 quoteSummary `price` module.
    pub async fn quote_summary(&self, symbol: &Symbol) -> Result<MarketInfo, ScreenerError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=price",
            self.base, symbol
        );
        let envelope: model::SummaryEnvelope = self.get_json(url).await?;
        if let Some(err) = envelope.quote_summary.error {
            return Err(ScreenerError::connector(
                "roboscreen-yfinance",
                err.message(),
            ));
        }
        let price = envelope
            .quote_summary
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .and_then(|r| r.price)
            .ok_or_else(|| ScreenerError::not_found(format!("market info for {symbol}")))?;
        Ok(MarketInfo {
            symbol: symbol.clone(),
            regular_market_price: price
                .regular_market_price
                .and_then(|v| v.raw)
                .and_then(Decimal::from_f64),
            market_state: price.market_state,
        })
    }
}

/// Assemble candles from the parallel arrays of a chart result.
///
/// Bars with a missing close are dropped entirely (the screener only needs
/// closes); missing open/high/low slots fall back to the close so a sparse
/// bar still yields a well-formed candle.
fn build_history(result: &model::ChartResult) -> History {
    let series = match result.indicators.quote.first() {
        Some(s) => s,
        None => return History::default(),
    };
    let candles = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, ts)| {
            let close = series
                .close
                .get(i)
                .copied()
                .flatten()
                .and_then(Decimal::from_f64)?;
            let field = |v: &Vec<Option<f64>>| {
                v.get(i)
                    .copied()
                    .flatten()
                    .and_then(Decimal::from_f64)
                    .unwrap_or(close)
            };
            Some(Candle {
                ts: DateTime::from_timestamp(*ts, 0)?,
                open: field(&series.open),
                high: field(&series.high),
                low: field(&series.low),
                close,
                volume: series.volume.get(i).copied().flatten(),
            })
        })
        .collect();
    History { candles }
}
