//! roboscreen-yfinance
//!
//! Connector that implements the roboscreen capability traits on top of the
//! public Yahoo Finance JSON endpoints: v8 chart for daily history, v7 quote
//! for the live price, and the v10 quoteSummary `price` module as the
//! documented "regular market price" fallback.
#![warn(missing_docs)]

/// HTTP client over the Yahoo endpoints.
pub mod client;
mod model;

use async_trait::async_trait;

use roboscreen_core::connector::{
    HistoryProvider, MarketInfoProvider, QuoteProvider, ScreenerConnector,
};
use roboscreen_core::{History, HistoryRequest, MarketInfo, Quote, ScreenerError, Symbol};

pub use client::YfClient;

/// Public connector type. Production users construct with
/// [`YfConnector::new_default`]; tests inject a mock server base URL.
pub struct YfConnector {
    client: YfClient,
}

impl Default for YfConnector {
    fn default() -> Self {
        Self::new_default()
    }
}

impl YfConnector {
    /// Build against the production Yahoo Finance endpoints.
    #[must_use]
    pub fn new_default() -> Self {
        Self {
            client: YfClient::default(),
        }
    }

    /// Build against an alternate base URL (mock servers in tests).
    pub fn with_base_url(base: impl Into<String>) -> Self {
        Self {
            client: YfClient::new(base),
        }
    }

    /// Build from a preconfigured [`YfClient`].
    #[must_use]
    pub fn from_client(client: YfClient) -> Self {
        Self { client }
    }

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: ScreenerError, what: &str) -> ScreenerError {
        match e {
            ScreenerError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    ScreenerError::not_found(what.to_string())
                } else {
                    ScreenerError::connector("roboscreen-yfinance", msg)
                }
            }
            ScreenerError::Other(msg) => ScreenerError::connector("roboscreen-yfinance", msg),
            other => other,
        }
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<History, ScreenerError> {
        self.client
            .chart(symbol, req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl QuoteProvider for YfConnector {
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, ScreenerError> {
        self.client
            .quote(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("quote for {symbol}")))
    }
}

#[async_trait]
impl MarketInfoProvider for YfConnector {
    async fn market_info(&self, symbol: &Symbol) -> Result<MarketInfo, ScreenerError> {
        self.client
            .quote_summary(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("market info for {symbol}")))
    }
}

impl ScreenerConnector for YfConnector {
    fn name(&self) -> &'static str {
        "roboscreen-yfinance"
    }
    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
    fn as_market_info_provider(&self) -> Option<&dyn MarketInfoProvider> {
        Some(self as &dyn MarketInfoProvider)
    }
}
