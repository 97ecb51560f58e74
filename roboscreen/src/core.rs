use std::sync::Arc;

use roboscreen_core::connector::ScreenerConnector;
use roboscreen_core::{HistoryRequest, ScreenerConfig, ScreenerError, Symbol};

use crate::watchlist::Watchlist;

/// Orchestrator that routes screener requests across registered providers.
pub struct Screener {
    pub(crate) connectors: Vec<Arc<dyn ScreenerConnector>>,
    pub(crate) watchlist: Watchlist,
    pub(crate) cfg: ScreenerConfig,
}

impl std::fmt::Debug for Screener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screener")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("watchlist", &self.watchlist)
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a [`Screener`] with custom configuration.
pub struct ScreenerBuilder {
    connectors: Vec<Arc<dyn ScreenerConnector>>,
    watchlist: Watchlist,
    cfg: ScreenerConfig,
}

impl Default for ScreenerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenerBuilder {
    /// Create a new builder with the built-in robotics watchlist and default
    /// configuration (5d/1d history, no provider timeout, 90s refresh).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            watchlist: Watchlist::robotics(),
            cfg: ScreenerConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is the fallback priority: per-symbol fetches try
    /// connectors in this order and stop at the first success.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn ScreenerConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the built-in robotics watchlist.
    #[must_use]
    pub fn watchlist(mut self, watchlist: Watchlist) -> Self {
        self.watchlist = watchlist;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: ScreenerConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the history window requested when deriving the previous close.
    #[must_use]
    pub const fn history_request(mut self, req: HistoryRequest) -> Self {
        self.cfg.history = req;
        self
    }

    /// Bound each individual provider call. Unset by default.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = Some(timeout);
        self
    }

    /// Set the automatic refresh cadence.
    #[must_use]
    pub const fn refresh_interval(mut self, interval: std::time::Duration) -> Self {
        self.cfg.refresh_interval = interval;
        self
    }

    /// Build the [`Screener`].
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](ScreenerBuilder::with_connector).
    pub fn build(self) -> Result<Screener, ScreenerError> {
        if self.connectors.is_empty() {
            return Err(ScreenerError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        Ok(Screener {
            connectors: self.connectors,
            watchlist: self.watchlist,
            cfg: self.cfg,
        })
    }
}

pub(crate) fn tag_err(connector: &str, e: ScreenerError) -> ScreenerError {
    match e {
        e @ (ScreenerError::NotFound { .. }
        | ScreenerError::ProviderTimeout { .. }
        | ScreenerError::Connector { .. }
        | ScreenerError::AllProvidersFailed(_)) => e,
        other => ScreenerError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Screener {
    /// Start building a new `Screener`.
    #[must_use]
    pub fn builder() -> ScreenerBuilder {
        ScreenerBuilder::new()
    }

    /// The watchlist this screener refreshes.
    #[must_use]
    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ScreenerConfig {
        &self.cfg
    }

    /// Wrap a provider future with the optional configured timeout.
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Option<std::time::Duration>,
        fut: Fut,
    ) -> Result<T, ScreenerError>
    where
        Fut: Future<Output = Result<T, ScreenerError>>,
    {
        match timeout {
            Some(bound) => (tokio::time::timeout(bound, fut).await)
                .unwrap_or_else(|_| Err(ScreenerError::provider_timeout(connector_name, capability))),
            None => fut.await,
        }
    }

    pub(crate) fn ordered(&self) -> Vec<Arc<dyn ScreenerConnector>> {
        self.connectors.clone()
    }

    /// Generic single-item fetch: try connectors in registration order, apply
    /// the optional per-provider timeout, return the first success.
    ///
    /// Errors aggregate across attempts; when every attempted provider reports
    /// `NotFound` the aggregate collapses to a single `NotFound`, and when no
    /// provider advertises the capability the result is `Unsupported`.
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        symbol: &Symbol,
        capability_label: &'static str,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, ScreenerError>
    where
        T: Send,
        F: Fn(Arc<dyn ScreenerConnector>, Symbol) -> Option<Fut> + Send,
        Fut: Future<Output = Result<T, ScreenerError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<ScreenerError> = Vec::new();

        for c in self.ordered() {
            if let Some(fut) = call(c.clone(), symbol.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability_label,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ (ScreenerError::NotFound { .. }
                    | ScreenerError::ProviderTimeout { .. })) => {
                        errors.push(e);
                    }
                    Err(e) => {
                        // A connector may itself surface an aggregate; keep
                        // the final error list flat.
                        errors.extend(tag_err(c.name(), e).flatten());
                    }
                }
            }
        }

        if !attempted_any {
            return Err(ScreenerError::unsupported(capability_label));
        }

        if !errors.is_empty()
            && errors
                .iter()
                .all(|e| matches!(e, ScreenerError::NotFound { .. }))
        {
            return Err(ScreenerError::not_found(format!(
                "{not_found_label} for {symbol}"
            )));
        }

        Err(ScreenerError::AllProvidersFailed(errors))
    }
}
