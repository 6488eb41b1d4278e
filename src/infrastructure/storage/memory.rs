//! In-memory history repository

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;

use crate::domain::pagination::{Cursor, PageRequest, Sort, MAX_LIMIT};
use crate::domain::{DomainError, DomainResult, History, HistoryPage, HistoryRepository, HistoryStatus};

/// Columns histories can be sorted by.
pub const SORTABLE_COLUMNS: &[&str] = &[
    "id",
    "name",
    "status",
    "started_at",
    "finished_at",
    "latency",
    "created_at",
];

/// In-memory history storage for development and testing
pub struct InMemoryHistoryRepository {
    histories: DashMap<u64, History>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            histories: DashMap::new(),
        }
    }

    pub fn with_records(records: impl IntoIterator<Item = History>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.insert(record);
        }
        repo
    }

    /// Deterministic sample data: `count` runs of a handful of jobs, one
    /// minute apart, every fourth one failed. The newest run is still going.
    pub fn seeded(count: u64, epoch: DateTime<Utc>) -> Self {
        const JOBS: &[&str] = &["sync-orders", "send-report", "purge-cache", "rotate-keys"];

        Self::with_records((1..=count).map(|id| {
            let started_at = epoch + Duration::minutes(id as i64);
            let status = if id == count {
                HistoryStatus::Running
            } else if id % 4 == 0 {
                HistoryStatus::Error
            } else {
                HistoryStatus::Success
            };
            let finished_at = match status {
                HistoryStatus::Running => started_at,
                _ => started_at + Duration::milliseconds(((id * 137) % 5000) as i64),
            };
            History {
                id,
                name: JOBS[(id as usize) % JOBS.len()].to_string(),
                status,
                started_at,
                finished_at,
                created_at: started_at,
            }
        }))
    }

    pub fn insert(&self, history: History) {
        self.histories.insert(history.id, history);
    }

    fn sorted(&self, sort: &Sort) -> Vec<History> {
        let mut records: Vec<History> = self.histories.iter().map(|e| e.value().clone()).collect();
        records.sort_by(|a, b| {
            sort.keys
                .iter()
                .map(|key| {
                    let ord = compare_column(a, b, &key.column);
                    if key.direction.is_descending() {
                        ord.reverse()
                    } else {
                        ord
                    }
                })
                .find(|ord| ord.is_ne())
                // ties fall back to id so cursors stay stable
                .unwrap_or_else(|| a.id.cmp(&b.id))
        });
        records
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_column(a: &History, b: &History, column: &str) -> Ordering {
    match column {
        "id" => a.id.cmp(&b.id),
        "name" => a.name.cmp(&b.name),
        "status" => a.status.as_str().cmp(b.status.as_str()),
        "started_at" => a.started_at.cmp(&b.started_at),
        "finished_at" => a.finished_at.cmp(&b.finished_at),
        "latency" => a.latency().cmp(&b.latency()),
        "created_at" => a.created_at.cmp(&b.created_at),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn find_page(&self, request: &PageRequest, sort: &Sort) -> DomainResult<HistoryPage> {
        if let Some(key) = sort
            .keys
            .iter()
            .find(|k| !SORTABLE_COLUMNS.contains(&k.column.as_str()))
        {
            return Err(DomainError::UnsupportedSortColumn(key.column.clone()));
        }
        if request.limit < 1 || request.limit > MAX_LIMIT {
            return Err(DomainError::InvalidLimit(request.limit));
        }
        let limit = request.limit as usize;

        let records = self.sorted(sort);
        let position = |id: &str| {
            records
                .iter()
                .position(|h| h.cursor() == id)
                .ok_or_else(|| DomainError::UnknownCursor(id.to_string()))
        };

        let (start, end) = match request.cursor()? {
            None => (0, limit.min(records.len())),
            Some(Cursor::StartingAfter(id)) => {
                let start = position(id)? + 1;
                (start, (start + limit).min(records.len()))
            }
            Some(Cursor::EndingBefore(id)) => {
                let end = position(id)?;
                (end.saturating_sub(limit), end)
            }
        };

        debug!(
            sort = %sort,
            limit,
            start,
            end,
            total = records.len(),
            "Paging histories"
        );

        // an empty window has no cursor to navigate from
        let (has_prev, has_next) = if start < end {
            (start > 0, end < records.len())
        } else {
            (false, false)
        };

        Ok(HistoryPage {
            has_prev,
            has_next,
            total: records.len() as u64,
            records: records[start..end].to_vec(),
        })
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.histories.len() as u64)
    }
}
