//! Roboscreen-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod market;
mod table;
mod watch;

pub use config::ScreenerConfig;
pub use error::ScreenerError;
pub use market::{Candle, History, HistoryRequest, Interval, MarketInfo, Quote, Range, Symbol};
pub use table::{ChangeSign, QuoteRow, QuoteTable, classify, round_display};
pub use watch::{CapTier, TickerEntry};
