use chrono::{DateTime, Utc};

use crate::client::InsightStats;

/// The latest stats/logs pair shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct InsightSnapshot {
    pub stats: InsightStats,
    pub logs: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

impl InsightSnapshot {
    pub fn new(stats: InsightStats, logs: Vec<String>) -> Self {
        Self {
            stats,
            logs,
            fetched_at: Utc::now(),
        }
    }
}
