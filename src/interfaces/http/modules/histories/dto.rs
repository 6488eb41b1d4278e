//! History DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::History;

/// Job run history row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryDto {
    pub id: u64,
    pub name: String,
    /// `SUCCESS`, `ERROR` or `RUNNING`
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Run duration, e.g. `1.250s`
    pub latency: String,
    pub created_at: DateTime<Utc>,
}

impl From<History> for HistoryDto {
    fn from(h: History) -> Self {
        Self {
            latency: h.latency_text(),
            status: h.status.to_string(),
            id: h.id,
            name: h.name,
            started_at: h.started_at,
            finished_at: h.finished_at,
            created_at: h.created_at,
        }
    }
}
