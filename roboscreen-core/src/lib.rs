//! roboscreen-core
//!
//! Core traits and helpers shared across the roboscreen ecosystem.
//!
//! - `connector`: the `ScreenerConnector` trait and capability provider traits.
//! - `metrics`: pure derivations over fetched data (previous close, percent
//!   change, display rounding).
//!
//! Data types live in `roboscreen-types` and are re-exported here so
//! downstream crates can depend on `roboscreen-core` only.
#![warn(missing_docs)]

/// Connector capability traits and the primary `ScreenerConnector` interface.
pub mod connector;
/// Pure derived-metric functions over fetched market data.
pub mod metrics;

pub use connector::ScreenerConnector;
pub use metrics::{percent_change, previous_close};
pub use roboscreen_types::*;
