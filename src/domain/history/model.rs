//! Job run history record

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// State of a job run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HistoryStatus {
    Success,
    Error,
    Running,
}

impl HistoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryStatus::Success => "SUCCESS",
            HistoryStatus::Error => "ERROR",
            HistoryStatus::Running => "RUNNING",
        }
    }
}

impl std::fmt::Display for HistoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the monitoring table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub id: u64,
    pub name: String,
    pub status: HistoryStatus,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl History {
    pub fn latency(&self) -> Duration {
        self.finished_at - self.started_at
    }

    /// Human readable latency, e.g. `1.250s`.
    pub fn latency_text(&self) -> String {
        let ms = self.latency().num_milliseconds();
        format!("{}.{:03}s", ms / 1000, ms % 1000)
    }

    /// Identifier used as this record's cursor.
    pub fn cursor(&self) -> String {
        self.id.to_string()
    }
}
