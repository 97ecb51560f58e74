use roboscreen_core::{History, HistoryRequest, ScreenerError, Symbol};

use crate::Screener;

impl Screener {
    /// Fetch a trailing daily history window for one symbol.
    ///
    /// Connectors are tried in registration order; the first success wins.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the
    /// capability.
    pub async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<History, ScreenerError> {
        self.fetch_single(symbol, "history", "history", move |c, sym| {
            c.as_history_provider()?;
            Some(async move {
                match c.as_history_provider() {
                    Some(p) => p.history(&sym, req).await,
                    None => Err(ScreenerError::connector(
                        c.name(),
                        "missing history capability during call",
                    )),
                }
            })
        })
        .await
    }
}
