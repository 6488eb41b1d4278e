//! Incoming pagination intent

use std::collections::BTreeMap;

use http::Uri;
use serde::{Deserialize, Serialize};

use super::{PaginationError, Sort};

/// Sort applied when the caller does not ask for one.
pub const DEFAULT_SORT: &str = "created_at DESC";
/// Page size applied when the caller leaves `limit` unset.
pub const DEFAULT_LIMIT: i64 = 25;
/// Largest page size callers are expected to accept.
pub const MAX_LIMIT: i64 = 100;

/// Parameters for requesting one page of a list.
///
/// Most fields are optional and filled in by [`PageRequest::validate`].
/// When a [`PageResponse`](super::PageResponse) is already at hand, use its
/// `prev_page_request` / `next_page_request` to traverse instead of building
/// one by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// Endpoint this request is anchored to; never serialised.
    #[serde(skip)]
    url: Option<Uri>,

    /// Sort of the resources, e.g. `id:desc,created_at:desc`.
    pub sort: String,
    /// Number of results per call. Accepted values: 1 - 100. Default 25.
    pub limit: i64,
    /// Resource ID after which the page starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Resource ID before which the page ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

/// Direction of travel encoded by the populated cursor field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor<'a> {
    StartingAfter(&'a str),
    EndingBefore(&'a str),
}

impl<'a> Cursor<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Cursor::StartingAfter(id) | Cursor::EndingBefore(id) => id,
        }
    }
}

impl PageRequest {
    pub fn new(sort: impl Into<String>, limit: i64) -> Self {
        Self {
            sort: sort.into(),
            limit,
            ..Self::default()
        }
    }

    /// Anchor the request to the endpoint it was received on.
    pub fn with_url(mut self, url: Uri) -> Self {
        self.url = Some(url);
        self
    }

    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }

    pub fn url(&self) -> Option<&Uri> {
        self.url.as_ref()
    }

    /// Decode `sort`, `limit`, `starting_after` and `ending_before` from a
    /// URL-encoded query string. Unknown keys are ignored.
    pub fn from_query_str(query: &str) -> Result<Self, PaginationError> {
        serde_urlencoded::from_str(query).map_err(|e| PaginationError::InvalidQuery(e.to_string()))
    }

    /// Check the request is anchored and apply defaults for `sort` and `limit`.
    ///
    /// Negative limits are left untouched; rejecting them is up to the data
    /// layer. Calling this twice is a no-op the second time.
    pub fn validate(&mut self) -> Result<(), PaginationError> {
        if self.url.is_none() {
            return Err(PaginationError::EmptyUrl);
        }
        if self.sort.is_empty() {
            self.sort = DEFAULT_SORT.to_string();
        }
        if self.limit == 0 {
            self.limit = DEFAULT_LIMIT;
        }
        Ok(())
    }

    /// Non-empty fields as query parameters, keyed by wire name.
    pub fn query_params(&self) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        if !self.sort.is_empty() {
            params.insert("sort", self.sort.clone());
        }
        if self.limit > 0 {
            params.insert("limit", self.limit.to_string());
        }
        if let Some(ref id) = self.starting_after {
            params.insert("starting_after", id.clone());
        }
        if let Some(ref id) = self.ending_before {
            params.insert("ending_before", id.clone());
        }
        params
    }

    /// Request-URI (path and query, no scheme or host) that fetches this
    /// page from `base`. Any query already on `base` is replaced.
    pub fn uri(&self, base: &Uri) -> String {
        let path = match base.path() {
            "" => "/",
            p => p,
        };

        let params = self.query_params();
        if params.is_empty() {
            return path.to_string();
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish();
        format!("{}?{}", path, query)
    }

    /// [`uri`](Self::uri) against the URL this request is anchored to.
    pub fn self_uri(&self) -> Option<String> {
        self.url.as_ref().map(|url| self.uri(url))
    }

    pub fn parsed_sort(&self) -> Result<Sort, PaginationError> {
        Sort::parse(&self.sort)
    }

    /// The populated cursor, if any. Setting both is rejected.
    pub fn cursor(&self) -> Result<Option<Cursor<'_>>, PaginationError> {
        match (self.starting_after.as_deref(), self.ending_before.as_deref()) {
            (Some(_), Some(_)) => Err(PaginationError::ConflictingCursors),
            (Some(id), None) => Ok(Some(Cursor::StartingAfter(id))),
            (None, Some(id)) => Ok(Some(Cursor::EndingBefore(id))),
            (None, None) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchored() -> PageRequest {
        PageRequest::default().with_url(Uri::from_static("/api/v1/histories"))
    }

    #[test]
    fn validate_applies_defaults_once() {
        let mut req = anchored();
        req.validate().unwrap();
        assert_eq!(req.sort, "created_at DESC");
        assert_eq!(req.limit, 25);

        let before = req.clone();
        req.validate().unwrap();
        assert_eq!(req, before);
    }

    #[test]
    fn validate_keeps_explicit_values() {
        let mut req = PageRequest::new("name:asc", 7).with_url(Uri::from_static("/x"));
        req.validate().unwrap();
        assert_eq!(req.sort, "name:asc");
        assert_eq!(req.limit, 7);
    }

    #[test]
    fn validate_passes_negative_limit_through() {
        let mut req = PageRequest::new("", -3).with_url(Uri::from_static("/x"));
        req.validate().unwrap();
        assert_eq!(req.limit, -3);
    }

    #[test]
    fn validate_requires_url() {
        let mut req = PageRequest::new("name:asc", 10).starting_after("a");
        assert_eq!(req.validate(), Err(PaginationError::EmptyUrl));

        let mut empty = PageRequest::default();
        assert_eq!(empty.validate(), Err(PaginationError::EmptyUrl));
        // nothing is defaulted on failure
        assert!(empty.sort.is_empty());
        assert_eq!(empty.limit, 0);
    }

    #[test]
    fn validate_ignores_other_fields_when_anchored() {
        let mut req = PageRequest::new("not a sort at all", -1)
            .starting_after("a")
            .ending_before("b")
            .with_url(Uri::from_static("/"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn unvalidated_request_has_no_params() {
        assert!(PageRequest::default().query_params().is_empty());
    }

    #[test]
    fn query_params_omit_empty_fields() {
        let req = PageRequest::new("name:asc", 0).ending_before("9");
        let params = req.query_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params["sort"], "name:asc");
        assert_eq!(params["ending_before"], "9");
        assert!(!params.contains_key("limit"));
    }

    #[test]
    fn query_params_round_trip() {
        let cases = [
            PageRequest::new("name:asc", 2),
            PageRequest::new("id:desc,created_at:desc", 100).starting_after("abc 1/2"),
            PageRequest::new("created_at DESC", 25).ending_before("x&y=z"),
        ];

        for req in cases {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(req.query_params().iter())
                .finish();
            let decoded = PageRequest::from_query_str(&encoded).unwrap();
            assert_eq!(decoded, req, "round trip of {}", encoded);
        }
    }

    #[test]
    fn from_query_str_rejects_non_numeric_limit() {
        assert!(matches!(
            PageRequest::from_query_str("limit=ten"),
            Err(PaginationError::InvalidQuery(_))
        ));
    }

    #[test]
    fn uri_replaces_query_and_sorts_keys() {
        let base: Uri = "http://monitor.local/api/v1/histories?limit=5&foo=bar"
            .parse()
            .unwrap();
        let req = PageRequest::new("created_at DESC", 25).starting_after("42");

        assert_eq!(
            req.uri(&base),
            "/api/v1/histories?limit=25&sort=created_at+DESC&starting_after=42"
        );
        // base is left as it was
        assert_eq!(base.query(), Some("limit=5&foo=bar"));
    }

    #[test]
    fn uri_without_params_is_bare_path() {
        let base = Uri::from_static("/api/v1/histories");
        assert_eq!(PageRequest::default().uri(&base), "/api/v1/histories");

        let root: Uri = "http://monitor.local".parse().unwrap();
        assert_eq!(PageRequest::default().uri(&root), "/");
    }

    #[test]
    fn self_uri_needs_anchor() {
        assert_eq!(PageRequest::new("id:asc", 3).self_uri(), None);
        assert_eq!(
            PageRequest::new("id:asc", 3)
                .with_url(Uri::from_static("/h"))
                .self_uri()
                .as_deref(),
            Some("/h?limit=3&sort=id%3Aasc")
        );
    }

    #[test]
    fn cursor_resolution() {
        assert_eq!(PageRequest::default().cursor(), Ok(None));
        assert_eq!(
            PageRequest::default().starting_after("5").cursor(),
            Ok(Some(Cursor::StartingAfter("5")))
        );
        assert_eq!(
            PageRequest::default().ending_before("5").cursor(),
            Ok(Some(Cursor::EndingBefore("5")))
        );
        assert_eq!(
            PageRequest::default()
                .starting_after("1")
                .ending_before("2")
                .cursor(),
            Err(PaginationError::ConflictingCursors)
        );
    }
}
