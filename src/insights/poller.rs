//! Insights Poller
//!
//! Background task that refreshes the dashboard snapshot on a fixed interval.

use futures_util::future::try_join;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::snapshot::InsightSnapshot;
use crate::client::ChatApi;
use crate::config::InsightsConfig;

const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Configuration for polling behavior
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Time between ticks
    pub interval: Duration,
    /// Log line limit passed to the backend
    pub log_lines: Option<u32>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            log_lines: None,
        }
    }
}

impl From<&InsightsConfig> for PollerConfig {
    fn from(config: &InsightsConfig) -> Self {
        let interval = if config.poll_interval_ms == 0 {
            tracing::warn!("poll_interval_ms must be positive, using {:?}", DEFAULT_INTERVAL);
            DEFAULT_INTERVAL
        } else {
            Duration::from_millis(config.poll_interval_ms)
        };

        Self {
            interval,
            log_lines: config.log_lines,
        }
    }
}

/// Polls `/insight/stats` and `/insight/logs`
pub struct InsightsPoller<A: ?Sized> {
    api: Arc<A>,
    config: PollerConfig,
}

/// Running poller; dropping it stops the timer
///
/// Fetches already in flight are left to finish.
pub struct PollerHandle {
    task: JoinHandle<()>,
    snapshots: watch::Receiver<Option<InsightSnapshot>>,
}

impl<A: ChatApi + ?Sized + 'static> InsightsPoller<A> {
    pub fn new(api: Arc<A>, config: PollerConfig) -> Self {
        Self { api, config }
    }

    /// Spawn the polling task; the first tick fires immediately
    pub fn start(self) -> PollerHandle {
        let (tx, rx) = watch::channel(None);
        let tx = Arc::new(tx);

        tracing::info!(interval_ms = self.config.interval.as_millis() as u64, "Starting insights polling");

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.config.interval);

            loop {
                ticker.tick().await;

                let api = Arc::clone(&self.api);
                let tx = Arc::clone(&tx);
                let log_lines = self.config.log_lines;

                tokio::spawn(async move {
                    if let Some(snapshot) = fetch_snapshot(api.as_ref(), log_lines).await {
                        tx.send_replace(Some(snapshot));
                    }
                });
            }
        });

        PollerHandle {
            task,
            snapshots: rx,
        }
    }
}

/// One tick: both endpoints or nothing
async fn fetch_snapshot<A: ChatApi + ?Sized>(api: &A, log_lines: Option<u32>) -> Option<InsightSnapshot> {
    match try_join(api.get_insight_stats(), api.get_insight_logs(log_lines)).await {
        Ok((stats, logs)) => {
            tracing::debug!(stats = stats.len(), logs = logs.logs.len(), "Fetched insight data");
            Some(InsightSnapshot::new(stats, logs.logs))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Error fetching insight data");
            None
        }
    }
}

impl PollerHandle {
    /// Latest successful snapshot, `None` until the first one arrives
    pub fn latest(&self) -> Option<InsightSnapshot> {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every new snapshot
    pub fn subscribe(&self) -> watch::Receiver<Option<InsightSnapshot>> {
        self.snapshots.clone()
    }

    /// Stop polling; same as dropping the handle
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("Insights polling stopped");
    }
}
