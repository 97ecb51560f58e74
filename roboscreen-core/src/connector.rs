use async_trait::async_trait;

use roboscreen_types::{History, HistoryRequest, MarketInfo, Quote, ScreenerError, Symbol};

/// Focused role trait for connectors that provide daily price history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch a trailing window of bars for the given symbol.
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<History, ScreenerError>;
}

/// Focused role trait for connectors that provide point-in-time quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the latest live/last-traded quote for the given symbol.
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, ScreenerError>;
}

/// Focused role trait for connectors that provide the general market-info
/// record used as the live-price fallback.
#[async_trait]
pub trait MarketInfoProvider: Send + Sync {
    /// Fetch the market-info record (including "regular market price") for
    /// the given symbol.
    async fn market_info(&self, symbol: &Symbol) -> Result<MarketInfo, ScreenerError>;
}

/// Main connector trait implemented by provider crates. Exposes capability
/// discovery; any provider exposing history plus a live-price path (with the
/// market-info fallback) is substitutable.
pub trait ScreenerConnector: Send + Sync {
    /// A stable identifier used in error tagging and priority ordering
    /// (e.g. "roboscreen-yfinance").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability by returning a usable trait object
    /// reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Advertise quote capability by returning a usable trait object
    /// reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }

    /// Advertise market-info capability by returning a usable trait object
    /// reference when supported.
    fn as_market_info_provider(&self) -> Option<&dyn MarketInfoProvider> {
        None
    }
}
