//! roboscreen keeps a near-real-time quote table over a robotics stock
//! watchlist.
//!
//! Overview
//! - A static [`Watchlist`] groups the robotics universe by market-cap tier.
//! - The [`Screener`] orchestrator routes per-symbol requests across
//!   registered connectors implementing the `roboscreen_core` contracts,
//!   trying them in registration order with optional per-call timeouts.
//! - Each refresh derives, per symbol, the previous close from a short daily
//!   history window and a live price from the real-time quote, falling back
//!   to the "regular market price" of the market-info record.
//! - Per-symbol failures degrade to blank row fields; a batch refresh never
//!   fails and always yields one row per requested symbol, in request order.
//! - [`Screener::spawn_refresh`] runs the batch on a timer (90s by default)
//!   and on manual triggers, publishing full tables on a watch channel.
//!
//! Building a screener against Yahoo Finance:
//! ```rust,ignore
//! use std::sync::Arc;
//! use roboscreen::Screener;
//! use roboscreen_yfinance::YfConnector;
//!
//! let screener = Arc::new(
//!     Screener::builder()
//!         .with_connector(Arc::new(YfConnector::new_default()))
//!         .build()?,
//! );
//! let table = screener.refresh_all().await;
//! for row in table.iter() {
//!     println!("{} {:?} {:?}", row.symbol, row.live_price, row.percent_change);
//! }
//! ```
//!
//! Running the periodic refresh:
//! ```rust,ignore
//! let (handle, mut rx) = screener.spawn_refresh();
//! rx.changed().await?;
//! let table = rx.borrow_and_update().clone();
//! handle.trigger(); // refresh now, outside the timer cadence
//! handle.stop().await;
//! ```
#![warn(missing_docs)]

/// Orchestrator and builder.
pub mod core;
/// Timer-driven and manual refresh.
pub mod refresh;
mod router;
/// The static watchlist registry.
pub mod watchlist;

pub use crate::core::{Screener, ScreenerBuilder};
pub use crate::refresh::RefreshHandle;
pub use crate::watchlist::Watchlist;

pub use roboscreen_core::{
    CapTier, ChangeSign, History, HistoryRequest, Interval, MarketInfo, Quote, QuoteRow,
    QuoteTable, Range, ScreenerConfig, ScreenerError, Symbol, TickerEntry, classify,
    round_display,
};
