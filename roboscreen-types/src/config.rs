//! Configuration shared by the orchestrator and the refresh layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::HistoryRequest;

/// Global configuration for the `Screener` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// History window requested per symbol when deriving the previous close.
    pub history: HistoryRequest,
    /// Optional per-provider call timeout.
    ///
    /// `None` by default: a slow provider call blocks the batch, matching the
    /// screener's original best-effort behavior. Set a bound when running
    /// against providers with unbounded tail latency.
    pub provider_timeout: Option<Duration>,
    /// Interval between automatic refreshes of the whole watchlist.
    pub refresh_interval: Duration,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            history: HistoryRequest::default(),
            provider_timeout: None,
            refresh_interval: Duration::from_secs(90),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Interval, Range};

    #[test]
    fn defaults_match_screener_behavior() {
        let cfg = ScreenerConfig::default();
        assert_eq!(cfg.history.range, Range::D5);
        assert_eq!(cfg.history.interval, Interval::D1);
        assert!(cfg.provider_timeout.is_none());
        assert_eq!(cfg.refresh_interval, Duration::from_secs(90));
    }
}
