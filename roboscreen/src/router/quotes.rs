use rust_decimal::Decimal;

use roboscreen_core::{MarketInfo, Quote, ScreenerError, Symbol};

use crate::Screener;

impl Screener {
    /// Fetch a point-in-time quote for one symbol.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the
    /// capability.
    pub async fn quote(&self, symbol: &Symbol) -> Result<Quote, ScreenerError> {
        self.fetch_single(symbol, "quote", "quote", move |c, sym| {
            c.as_quote_provider()?;
            Some(async move {
                match c.as_quote_provider() {
                    Some(p) => p.quote(&sym).await,
                    None => Err(ScreenerError::connector(
                        c.name(),
                        "missing quote capability during call",
                    )),
                }
            })
        })
        .await
    }

    /// Fetch the general market-info record for one symbol.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the
    /// capability.
    pub async fn market_info(&self, symbol: &Symbol) -> Result<MarketInfo, ScreenerError> {
        self.fetch_single(symbol, "market_info", "market info", move |c, sym| {
            c.as_market_info_provider()?;
            Some(async move {
                match c.as_market_info_provider() {
                    Some(p) => p.market_info(&sym).await,
                    None => Err(ScreenerError::connector(
                        c.name(),
                        "missing market_info capability during call",
                    )),
                }
            })
        })
        .await
    }

    /// Best-effort live price: the real-time quote first, then the
    /// "regular market price" from the market-info record when the quote
    /// fails or carries no price.
    ///
    /// Never fails. A symbol with no price on either path yields `None`.
    pub async fn live_price(&self, symbol: &Symbol) -> Option<Decimal> {
        match self.quote(symbol).await {
            Ok(Quote {
                price: Some(price), ..
            }) => return Some(price),
            Ok(_) => {
                tracing::debug!(%symbol, "quote carried no price, trying market info");
            }
            Err(e) => {
                tracing::debug!(%symbol, error = %e, "quote failed, trying market info");
            }
        }
        match self.market_info(symbol).await {
            Ok(info) => info.regular_market_price,
            Err(e) => {
                tracing::debug!(%symbol, error = %e, "market info failed, price absent");
                None
            }
        }
    }
}
