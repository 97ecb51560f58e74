//! Market data primitives: symbols, candles, histories, quotes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange ticker symbol, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Construct a symbol, trimming whitespace and uppercasing.
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_ascii_uppercase())
    }

    /// Borrow the inner ticker string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Bar cadence for history requests. Only daily bars are needed by the screener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Interval {
    /// One bar per trading day.
    #[default]
    D1,
}

impl Interval {
    /// Wire/query representation, e.g. "1d".
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
        }
    }
}

/// Trailing window for history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Range {
    /// Five most recent trading days. Enough to recover the previous close.
    #[default]
    D5,
    /// One trailing month.
    M1,
    /// Three trailing months.
    M3,
}

impl Range {
    /// Wire/query representation, e.g. "5d".
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
        }
    }
}

/// Parameters for a history fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Trailing window to request.
    pub range: Range,
    /// Bar cadence.
    pub interval: Interval,
}

/// A single OHLCV bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: Decimal,
    /// Intraday high.
    pub high: Decimal,
    /// Intraday low.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume, when reported.
    pub volume: Option<u64>,
}

/// Daily price history for one symbol, oldest bar first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct History {
    /// Bars in ascending timestamp order.
    pub candles: Vec<Candle>,
}

impl History {
    /// Closing prices in bar order.
    #[must_use]
    pub fn closes(&self) -> Vec<Decimal> {
        self.candles.iter().map(|c| c.close).collect()
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// True when no bars were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}

/// Point-in-time quote from a provider's real-time interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quoted symbol.
    pub symbol: Symbol,
    /// Short display name reported by the provider.
    pub shortname: Option<String>,
    /// Last traded price, when available.
    pub price: Option<Decimal>,
    /// Provider-reported previous close. Informational only; the screener
    /// derives its own previous close from daily history.
    pub previous_close: Option<Decimal>,
}

/// General market-info record used as a fallback when the real-time quote
/// interface fails or reports no price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketInfo {
    /// Symbol the record describes.
    pub symbol: Symbol,
    /// The "regular market price" field, when present.
    pub regular_market_price: Option<Decimal>,
    /// Provider market-state string (e.g. "REGULAR", "CLOSED"), when present.
    pub market_state: Option<String>,
}
