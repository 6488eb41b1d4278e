//! Cursor pagination query parameters

use axum::http::Uri;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::domain::PageRequest;

/// Pagination parameters accepted by list endpoints
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Sort, e.g. `name:asc,started_at:desc`. Default: `created_at DESC`
    pub sort: Option<String>,
    /// Results per page (0–100). `0` or absent means the default of 25
    #[validate(range(min = 0, max = 100, message = "limit must be between 0 and 100, 0 means the default"))]
    pub limit: Option<i64>,
    /// Return the page right after this record ID
    pub starting_after: Option<String>,
    /// Return the page right before this record ID
    pub ending_before: Option<String>,
}

impl PageQuery {
    /// Anchor the query to the URL it arrived on. Defaults are not applied
    /// here; call [`PageRequest::validate`] for that.
    pub fn into_page_request(self, url: Uri) -> PageRequest {
        let mut request =
            PageRequest::new(self.sort.unwrap_or_default(), self.limit.unwrap_or(0)).with_url(url);
        request.starting_after = self.starting_after;
        request.ending_before = self.ending_before;
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_and_anchors() {
        let query = PageQuery {
            sort: Some("name:asc".into()),
            limit: Some(2),
            starting_after: Some("2".into()),
            ending_before: None,
        };
        let request = query.into_page_request(Uri::from_static("/api/v1/histories"));

        assert_eq!(request.sort, "name:asc");
        assert_eq!(request.limit, 2);
        assert_eq!(request.starting_after.as_deref(), Some("2"));
        assert_eq!(request.url().map(|u| u.path()), Some("/api/v1/histories"));
    }

    #[test]
    fn absent_fields_stay_empty_until_validated() {
        let mut request = PageQuery::default().into_page_request(Uri::from_static("/h"));
        assert!(request.query_params().is_empty());

        request.validate().unwrap();
        assert_eq!(request.sort, "created_at DESC");
        assert_eq!(request.limit, 25);
    }

    #[test]
    fn limit_range_is_checked() {
        let over = PageQuery {
            limit: Some(101),
            ..PageQuery::default()
        };
        let errors = over.validate().unwrap_err();
        let message = errors.field_errors()["limit"][0].message.clone().unwrap();
        assert_eq!(message, "limit must be between 0 and 100, 0 means the default");

        let negative = PageQuery {
            limit: Some(-1),
            ..PageQuery::default()
        };
        assert!(negative.validate().is_err());

        let zero = PageQuery {
            limit: Some(0),
            ..PageQuery::default()
        };
        assert!(zero.validate().is_ok());
    }
}
