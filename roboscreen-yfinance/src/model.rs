//! Serde models for the Yahoo Finance endpoints the screener consumes.
//!
//! Field-level absence is the norm in these payloads: delisted or halted
//! symbols come back with `null` slots inside otherwise successful
//! responses, so every numeric field is optional.

use serde::Deserialize;

// ---- v8 chart (daily history) ----

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: ChartResponse,
}

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    pub quote: Vec<OhlcvSeries>,
}

#[derive(Debug, Deserialize)]
pub struct OhlcvSeries {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

// ---- v7 quote (live price) ----

#[derive(Debug, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    pub quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    pub result: Option<Vec<QuoteResult>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteResult {
    pub symbol: String,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<f64>,
    #[serde(rename = "regularMarketPreviousClose")]
    pub regular_market_previous_close: Option<f64>,
}

// ---- v10 quoteSummary, `price` module (market-info fallback) ----

#[derive(Debug, Deserialize)]
pub struct SummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: SummaryResponse,
}

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub result: Option<Vec<SummaryResult>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryResult {
    pub price: Option<PriceModule>,
}

#[derive(Debug, Deserialize)]
pub struct PriceModule {
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<RawValue>,
    #[serde(rename = "marketState")]
    pub market_state: Option<String>,
}

/// Yahoo's `{ "raw": 12.34, "fmt": "12.34" }` numeric envelope.
#[derive(Debug, Deserialize)]
pub struct RawValue {
    pub raw: Option<f64>,
}

/// Error object Yahoo embeds in otherwise well-formed envelopes.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl ApiError {
    pub fn message(&self) -> String {
        match (&self.code, &self.description) {
            (Some(c), Some(d)) => format!("{c}: {d}"),
            (Some(c), None) => c.clone(),
            (None, Some(d)) => d.clone(),
            (None, None) => "unspecified provider error".to_string(),
        }
    }
}
