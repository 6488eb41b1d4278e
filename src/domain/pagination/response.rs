//! Outcome of applying a [`PageRequest`] to a result set

use http::Uri;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PageRequest;

/// Pagination metadata returned alongside a page of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PageResponse {
    /// Sort the page was produced with
    pub sort: String,
    /// Cursor echoed from the originating request
    pub starting_after: Option<String>,
    /// Cursor echoed from the originating request
    pub ending_before: Option<String>,
    /// Matching records across all pages
    pub total: i64,
    /// Records returned in this page
    pub yielded: i64,
    /// Page size
    pub limit: i64,
    /// Link to the previous page, `null` when there is none
    pub previous_uri: Option<String>,
    /// Link to the next page, `null` when there is none
    pub next_uri: Option<String>,
    /// Identifiers of the first and last record of this page, in the order
    /// they were returned. Format: `[first, last]`.
    pub cursor_range: Vec<String>,
}

impl PageResponse {
    /// Echo `request` (after defaulting) into a response for a page of
    /// `yielded` records bounded by `cursor_range`.
    pub fn from_request(
        request: &PageRequest,
        total: i64,
        yielded: i64,
        cursor_range: Vec<String>,
    ) -> Self {
        Self {
            sort: request.sort.clone(),
            starting_after: request.starting_after.clone(),
            ending_before: request.ending_before.clone(),
            total,
            yielded,
            limit: request.limit,
            previous_uri: None,
            next_uri: None,
            cursor_range,
        }
    }

    /// Fill in navigation links against `base` for the pages the data layer
    /// reported as existing.
    pub fn with_navigation(mut self, has_prev: bool, has_next: bool, base: &Uri) -> Self {
        self.previous_uri = has_prev.then(|| self.prev_page_request().uri(base));
        self.next_uri = has_next.then(|| self.next_page_request().uri(base));
        self
    }

    /// Returns true if a previous page exists and can be traversed.
    pub fn has_prev_page(&self) -> bool {
        self.previous_uri.is_some()
    }

    /// Returns true if a next page exists and can be traversed.
    pub fn has_next_page(&self) -> bool {
        self.next_uri.is_some()
    }

    /// Cursor to be used as the `ending_before` value.
    pub fn prev_page_cursor(&self) -> Option<&str> {
        self.cursor_range.first().map(String::as_str)
    }

    /// Cursor to be used as the `starting_after` value.
    pub fn next_page_cursor(&self) -> Option<&str> {
        self.cursor_range.get(1).map(String::as_str)
    }

    /// Request for the page preceding this one.
    pub fn prev_page_request(&self) -> PageRequest {
        let mut request = PageRequest::new(self.sort.clone(), self.limit);
        request.ending_before = self.prev_page_cursor().map(str::to_string);
        request
    }

    /// Request for the page following this one.
    pub fn next_page_request(&self) -> PageRequest {
        let mut request = PageRequest::new(self.sort.clone(), self.limit);
        request.starting_after = self.next_page_cursor().map(str::to_string);
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(range: &[&str]) -> PageResponse {
        PageResponse {
            sort: "name:asc".to_string(),
            limit: 2,
            cursor_range: range.iter().map(|s| s.to_string()).collect(),
            ..PageResponse::default()
        }
    }

    #[test]
    fn navigation_presence_follows_uris() {
        let mut resp = response(&["1", "2"]);
        assert!(!resp.has_prev_page());
        assert!(!resp.has_next_page());

        resp.next_uri = Some("/h?starting_after=2".to_string());
        assert!(resp.has_next_page());
        assert!(!resp.has_prev_page());
    }

    #[test]
    fn empty_range_has_no_cursors() {
        let resp = response(&[]);
        assert_eq!(resp.prev_page_cursor(), None);
        assert_eq!(resp.next_page_cursor(), None);
    }

    #[test]
    fn single_entry_range_has_prev_cursor_only() {
        let resp = response(&["7"]);
        assert_eq!(resp.prev_page_cursor(), Some("7"));
        assert_eq!(resp.next_page_cursor(), None);
    }

    #[test]
    fn full_range_bounds() {
        let resp = response(&["3", "4"]);
        assert_eq!(resp.prev_page_cursor(), Some("3"));
        assert_eq!(resp.next_page_cursor(), Some("4"));
    }

    #[test]
    fn traversal_requests_set_one_cursor() {
        for range in [&[][..], &["1"][..], &["1", "2"][..]] {
            let mut resp = response(range);
            resp.starting_after = Some("0".to_string());
            resp.ending_before = Some("9".to_string());

            let next = resp.next_page_request();
            assert_eq!(next.ending_before, None);
            assert_eq!(next.sort, "name:asc");
            assert_eq!(next.limit, 2);

            let prev = resp.prev_page_request();
            assert_eq!(prev.starting_after, None);
            assert_eq!(prev.sort, "name:asc");
            assert_eq!(prev.limit, 2);
        }
    }

    #[test]
    fn from_request_echoes_fields() {
        let req = PageRequest::new("status:desc", 10).starting_after("12");
        let resp = PageResponse::from_request(&req, 40, 10, vec!["13".into(), "22".into()]);

        assert_eq!(resp.sort, "status:desc");
        assert_eq!(resp.limit, 10);
        assert_eq!(resp.starting_after.as_deref(), Some("12"));
        assert_eq!(resp.ending_before, None);
        assert_eq!(resp.total, 40);
        assert_eq!(resp.yielded, 10);
        assert!(!resp.has_prev_page() && !resp.has_next_page());
    }

    #[test]
    fn with_navigation_builds_links() {
        let base = Uri::from_static("/api/v1/histories");
        let resp = response(&["3", "4"]).with_navigation(true, true, &base);

        assert_eq!(
            resp.previous_uri.as_deref(),
            Some("/api/v1/histories?ending_before=3&limit=2&sort=name%3Aasc")
        );
        assert_eq!(
            resp.next_uri.as_deref(),
            Some("/api/v1/histories?limit=2&sort=name%3Aasc&starting_after=4")
        );

        let last = response(&["5"]).with_navigation(true, false, &base);
        assert!(last.has_prev_page());
        assert!(!last.has_next_page());
    }

    #[test]
    fn serializes_wire_names() {
        let json = serde_json::to_value(response(&["1", "2"])).unwrap();
        for key in [
            "sort",
            "starting_after",
            "ending_before",
            "total",
            "yielded",
            "limit",
            "previous_uri",
            "next_uri",
            "cursor_range",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert!(json["previous_uri"].is_null());
        assert_eq!(json["cursor_range"], serde_json::json!(["1", "2"]));
    }
}
