//! Mock connector for CI-safe tests and demos. Provides deterministic data
//! from static fixtures covering the robotics watchlist, plus a handful of
//! special symbols that force specific degradations:
//!
//! - `FAIL`: every capability errors.
//! - `NOQUOTE`: the quote capability errors but market-info carries a price,
//!   exercising the live-price fallback.
//! - `NOLIVE`: both live-price paths fail while history succeeds.
//! - `THIN`: history returns a single bar (no previous close derivable).
//! - `ZERO`: the derived previous close is zero (percent change undefined).

use async_trait::async_trait;

use roboscreen_core::connector::{
    HistoryProvider, MarketInfoProvider, QuoteProvider, ScreenerConnector,
};
use roboscreen_core::{History, HistoryRequest, MarketInfo, Quote, ScreenerError, Symbol};

mod fixtures;

/// Deterministic fixture-backed connector.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Construct the mock connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> ScreenerError {
        ScreenerError::not_found(what.to_string())
    }

    fn maybe_fail(symbol: &Symbol, capability: &'static str) -> Result<(), ScreenerError> {
        if symbol.as_str() == "FAIL" {
            return Err(ScreenerError::connector(
                "roboscreen-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl ScreenerConnector for MockConnector {
    fn name(&self) -> &'static str {
        "roboscreen-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
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

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        _req: HistoryRequest,
    ) -> Result<History, ScreenerError> {
        Self::maybe_fail(symbol, "history")?;
        fixtures::history::by_symbol(symbol.as_str())
            .ok_or_else(|| Self::not_found(&format!("history for {symbol}")))
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, ScreenerError> {
        Self::maybe_fail(symbol, "quote")?;
        fixtures::quotes::by_symbol(symbol.as_str())
            .ok_or_else(|| Self::not_found(&format!("quote for {symbol}")))
    }
}

#[async_trait]
impl MarketInfoProvider for MockConnector {
    async fn market_info(&self, symbol: &Symbol) -> Result<MarketInfo, ScreenerError> {
        Self::maybe_fail(symbol, "market_info")?;
        fixtures::info::by_symbol(symbol.as_str())
            .ok_or_else(|| Self::not_found(&format!("market info for {symbol}")))
    }
}
