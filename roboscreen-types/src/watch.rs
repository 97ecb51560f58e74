//! Watchlist building blocks: market-cap tiers and ticker entries.

use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Market-cap tier a watchlist ticker is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapTier {
    /// Large-cap robotics names.
    LargeCap,
    /// Mid-cap robotics names.
    MidCap,
    /// Small-cap robotics names.
    SmallCap,
    /// Robotics-themed ETFs.
    Etf,
}

impl CapTier {
    /// Human-readable group label used in presentation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LargeCap => "Large Cap Robotics",
            Self::MidCap => "Mid Cap Robotics",
            Self::SmallCap => "Small Cap Robotics",
            Self::Etf => "Robotics ETF",
        }
    }

    /// All tiers in presentation order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::LargeCap, Self::MidCap, Self::SmallCap, Self::Etf]
    }
}

impl std::fmt::Display for CapTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One immutable watchlist entry: a ticker with its display name and tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerEntry {
    /// Exchange ticker.
    pub symbol: Symbol,
    /// Display name, e.g. "Intuitive Surgical".
    pub name: String,
    /// Tier the entry is listed under.
    pub tier: CapTier,
}

impl TickerEntry {
    /// Convenience constructor.
    pub fn new(symbol: impl Into<Symbol>, name: impl Into<String>, tier: CapTier) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            tier,
        }
    }
}
