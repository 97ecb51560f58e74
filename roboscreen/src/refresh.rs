//! Timer-driven and manual refresh of the watchlist table.

use std::sync::Arc;

use tokio::sync::{Notify, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use roboscreen_core::QuoteTable;

use crate::Screener;

/// Handle to a running refresh task.
///
/// Dropping the handle aborts the task; prefer [`RefreshHandle::stop`] for an
/// orderly shutdown that waits for an in-flight refresh to finish.
pub struct RefreshHandle {
    trigger: Arc<Notify>,
    stop: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Request an immediate refresh, outside the timer cadence.
    ///
    /// Triggers fired while a refresh is already running coalesce into a
    /// single follow-up refresh.
    pub fn trigger(&self) {
        self.trigger.notify_one();
    }

    /// Stop the refresh task and wait for it to wind down.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}

impl Screener {
    /// Spawn the periodic refresh task.
    ///
    /// The task refreshes the whole watchlist immediately, then every
    /// `refresh_interval`, publishing each full table on the returned watch
    /// channel. Manual triggers via the handle run a refresh between ticks.
    /// Refreshes never overlap; a tick or trigger that lands mid-refresh is
    /// deferred until the running one completes.
    #[must_use]
    pub fn spawn_refresh(self: &Arc<Self>) -> (RefreshHandle, watch::Receiver<QuoteTable>) {
        let screener = Arc::clone(self);
        let (tx, rx) = watch::channel(QuoteTable::default());
        let trigger = Arc::new(Notify::new());
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task_trigger = Arc::clone(&trigger);
        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(screener.cfg.refresh_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {}
                    () = task_trigger.notified() => {
                        tracing::debug!("manual refresh triggered");
                    }
                }
                let table = screener.refresh_all().await;
                if tx.send(table).is_err() {
                    // All receivers gone; nothing left to publish to.
                    break;
                }
            }
            tracing::debug!("refresh task stopped");
        });

        (
            RefreshHandle {
                trigger,
                stop: Some(stop_tx),
                join: Some(join),
            },
            rx,
        )
    }
}
