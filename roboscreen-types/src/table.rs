//! The per-refresh quote table and its presentation helpers.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{CapTier, Symbol};

/// One derived row of the screener table.
///
/// Every price field is optional: an upstream failure or missing field leaves
/// the field `None`, never zero or a sentinel, so absence stays inspectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRow {
    /// Requested ticker.
    pub symbol: Symbol,
    /// Display name from the watchlist, `None` for unregistered symbols.
    pub name: Option<String>,
    /// Tier label from the watchlist, `None` for unregistered symbols.
    pub tier: Option<CapTier>,
    /// Second-most-recent daily close, rounded for display.
    pub previous_close: Option<Decimal>,
    /// Last traded (or regular-market fallback) price, rounded for display.
    pub live_price: Option<Decimal>,
    /// `(live - prev) / prev * 100`, rounded for display. `None` whenever an
    /// operand is missing or the previous close is zero.
    pub percent_change: Option<Decimal>,
}

/// Ordered quote rows, one per requested symbol, rebuilt fully per refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteTable {
    /// Rows in request order.
    pub rows: Vec<QuoteRow>,
}

impl QuoteTable {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in request order.
    pub fn iter(&self) -> impl Iterator<Item = &QuoteRow> {
        self.rows.iter()
    }

    /// Rows carrying the given tier label, preserving request order.
    pub fn rows_for(&self, tier: CapTier) -> impl Iterator<Item = &QuoteRow> {
        self.rows.iter().filter(move |r| r.tier == Some(tier))
    }
}

impl IntoIterator for QuoteTable {
    type Item = QuoteRow;
    type IntoIter = std::vec::IntoIter<QuoteRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Sign classification of a percent change, used purely for visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeSign {
    /// Strictly positive change.
    Positive,
    /// Strictly negative change.
    Negative,
    /// Zero or unknown change.
    Flat,
}

/// Classify a percent change by sign.
///
/// `Positive` iff `x > 0`, `Negative` iff `x < 0`, `Flat` for zero or absent.
#[must_use]
pub fn classify(percent_change: Option<Decimal>) -> ChangeSign {
    match percent_change {
        Some(x) if x > Decimal::ZERO => ChangeSign::Positive,
        Some(x) if x < Decimal::ZERO => ChangeSign::Negative,
        _ => ChangeSign::Flat,
    }
}

/// Round a price or percentage to two decimals for display.
///
/// Half-way values round away from zero: 12.345 becomes 12.35 and -12.345
/// becomes -12.35.
#[must_use]
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
