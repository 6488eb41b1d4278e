//! History repository interface

use async_trait::async_trait;

use super::model::History;
use crate::domain::pagination::{PageRequest, Sort};
use crate::domain::DomainResult;

/// One page of histories as produced by the data layer.
#[derive(Debug, Clone, Default)]
pub struct HistoryPage {
    pub records: Vec<History>,
    /// Matching records across all pages
    pub total: u64,
    /// Both false for an empty page, which has no cursor to navigate from
    pub has_prev: bool,
    pub has_next: bool,
}

impl HistoryPage {
    /// `[first, last]` record identifiers in return order; empty for an
    /// empty page.
    pub fn cursor_range(&self) -> Vec<String> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => vec![first.cursor(), last.cursor()],
            _ => Vec::new(),
        }
    }
}

/// Source of paginated histories.
///
/// Implementations receive a validated request together with its parsed
/// sort and must return at most `request.limit` records.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn find_page(&self, request: &PageRequest, sort: &Sort) -> DomainResult<HistoryPage>;
    async fn count(&self) -> DomainResult<u64>;
}
