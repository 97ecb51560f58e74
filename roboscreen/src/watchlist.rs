//! Static watchlist registry: the robotics universe grouped by cap tier.

use roboscreen_core::{CapTier, Symbol, TickerEntry};

/// Immutable watchlist of tickers grouped by market-cap tier.
///
/// The registry is built once and never mutated afterwards. Symbols may
/// legitimately appear under more than one tier (ROBO and BOTZ are listed
/// both as small caps and as ETFs); flat lookups by symbol resolve to the
/// last-registered entry, while per-tier views keep each appearance.
#[derive(Debug, Clone)]
pub struct Watchlist {
    entries: Vec<TickerEntry>,
}

impl Watchlist {
    /// Build a watchlist from explicit entries.
    ///
    /// Entries keep their given order. A symbol repeated within the same tier
    /// is dropped after its first appearance; the same symbol under a
    /// different tier is kept as a distinct entry.
    #[must_use]
    pub fn new(entries: Vec<TickerEntry>) -> Self {
        let mut seen: Vec<(CapTier, Symbol)> = Vec::new();
        let entries = entries
            .into_iter()
            .filter(|e| {
                let key = (e.tier, e.symbol.clone());
                if seen.contains(&key) {
                    false
                } else {
                    seen.push(key);
                    true
                }
            })
            .collect();
        Self { entries }
    }

    /// The built-in robotics universe, tiers in presentation order.
    #[must_use]
    pub fn robotics() -> Self {
        use CapTier::{Etf, LargeCap, MidCap, SmallCap};
        Self::new(vec![
            TickerEntry::new("ISRG", "Intuitive Surgical", LargeCap),
            TickerEntry::new("NVDA", "NVIDIA", LargeCap),
            TickerEntry::new("AMZN", "Amazon Robotics", LargeCap),
            TickerEntry::new("TSLA", "Tesla Robotics/AI", LargeCap),
            TickerEntry::new("ROK", "Rockwell Automation", LargeCap),
            TickerEntry::new("ABBNY", "ABB Ltd", LargeCap),
            TickerEntry::new("CGNX", "Cognex", MidCap),
            TickerEntry::new("TER", "Teradyne / UR", MidCap),
            TickerEntry::new("PATH", "UiPath", MidCap),
            TickerEntry::new("FANUY", "Fanuc", MidCap),
            TickerEntry::new("KITT", "Robotic Research", SmallCap),
            TickerEntry::new("ARBE", "Arbe Robotics", SmallCap),
            TickerEntry::new("ROBO", "ROBO ETF", SmallCap),
            TickerEntry::new("BOTZ", "BOTZ ETF", SmallCap),
            TickerEntry::new("VICR", "Vicor", SmallCap),
            TickerEntry::new("RR", "Ritch Tech Robotics", SmallCap),
            TickerEntry::new("SERV", "Servotronics", SmallCap),
            TickerEntry::new("SYM", "Service Robotics", SmallCap),
            TickerEntry::new("MYO", "Myo Robotics", SmallCap),
            TickerEntry::new("BBAI", "BigBear.ai", SmallCap),
            TickerEntry::new("EVLV", "Evolv Technologies", SmallCap),
            TickerEntry::new("AMCI", "AMC Industrial Robotics", SmallCap),
            TickerEntry::new("ROBO", "ROBO Global Robotics & Automation ETF", Etf),
            TickerEntry::new("BOTZ", "Global X Robotics & Artificial Intelligence ETF", Etf),
            TickerEntry::new("ARKQ", "ARK Autonomous Technology & Robotics ETF", Etf),
            TickerEntry::new("IRBO", "iRobot Corporation ETF", Etf),
        ])
    }

    /// All entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[TickerEntry] {
        &self.entries
    }

    /// Every registered symbol in registration order, cross-tier duplicates
    /// included. This is the batch-refresh request list.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.entries.iter().map(|e| e.symbol.clone()).collect()
    }

    /// Entries listed under one tier, in registration order.
    pub fn tier_entries(&self, tier: CapTier) -> impl Iterator<Item = &TickerEntry> {
        self.entries.iter().filter(move |e| e.tier == tier)
    }

    /// Symbols listed under one tier, in registration order.
    #[must_use]
    pub fn tier_symbols(&self, tier: CapTier) -> Vec<Symbol> {
        self.tier_entries(tier).map(|e| e.symbol.clone()).collect()
    }

    /// Display name for a symbol. When a symbol appears under several tiers
    /// the last-registered entry wins.
    #[must_use]
    pub fn name_of(&self, symbol: &Symbol) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| &e.symbol == symbol)
            .map(|e| e.name.as_str())
    }

    /// Tier for a symbol, last-registered entry winning as with [`name_of`].
    ///
    /// [`name_of`]: Watchlist::name_of
    #[must_use]
    pub fn tier_of(&self, symbol: &Symbol) -> Option<CapTier> {
        self.entries
            .iter()
            .rev()
            .find(|e| &e.symbol == symbol)
            .map(|e| e.tier)
    }

    /// Number of entries (cross-tier duplicates counted per appearance).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the watchlist has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Watchlist {
    fn default() -> Self {
        Self::robotics()
    }
}
