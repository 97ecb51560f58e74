use roboscreen_core::metrics::{percent_change, previous_close};
use roboscreen_core::{CapTier, QuoteRow, QuoteTable, Symbol, round_display};

use crate::Screener;

impl Screener {
    /// Build one derived table row for a symbol.
    ///
    /// Per-symbol failures degrade to absent fields: a failed history lookup
    /// leaves `previous_close` (and hence `percent_change`) unset, a failed
    /// live-price lookup leaves `live_price` unset. The row itself is always
    /// produced.
    async fn build_row(&self, symbol: &Symbol) -> QuoteRow {
        let prev = match self.history(symbol, self.cfg.history).await {
            Ok(hist) => previous_close(&hist),
            Err(e) => {
                tracing::debug!(%symbol, error = %e, "history unavailable");
                None
            }
        };
        let live = self.live_price(symbol).await;
        // Derive from unrounded operands, round only for display.
        let pct = percent_change(prev, live);
        QuoteRow {
            symbol: symbol.clone(),
            name: self.watchlist.name_of(symbol).map(str::to_string),
            tier: self.watchlist.tier_of(symbol),
            previous_close: prev.map(round_display),
            live_price: live.map(round_display),
            percent_change: pct.map(round_display),
        }
    }

    /// Build the quote table for an explicit symbol list.
    ///
    /// Symbols are fetched one at a time, in request order, and the table
    /// carries exactly one row per requested symbol in that order. The batch
    /// never fails: upstream errors only blank the affected row fields.
    pub async fn fetch_quotes(&self, symbols: &[Symbol]) -> QuoteTable {
        let mut rows = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            rows.push(self.build_row(symbol).await);
        }
        tracing::info!(rows = rows.len(), "quote table built");
        QuoteTable { rows }
    }

    /// Refresh the whole watchlist, producing a fresh table.
    pub async fn refresh_all(&self) -> QuoteTable {
        self.fetch_quotes(&self.watchlist.symbols()).await
    }

    /// Build the table for one tier of the watchlist.
    ///
    /// A symbol listed under several tiers is fetched with this tier's label,
    /// so the small-cap and ETF views of ROBO each carry their own tier.
    pub async fn tier_table(&self, tier: CapTier) -> QuoteTable {
        let symbols = self.watchlist.tier_symbols(tier);
        let mut table = self.fetch_quotes(&symbols).await;
        for (row, entry) in table.rows.iter_mut().zip(self.watchlist.tier_entries(tier)) {
            row.name = Some(entry.name.clone());
            row.tier = Some(tier);
        }
        table
    }
}
