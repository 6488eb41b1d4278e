//! Response envelopes and error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use super::ResponseFormat;
use crate::domain::{DomainError, PageResponse, PaginationError, Sort};

/// Standard API response envelope
///
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload, `null` on error
    pub data: Option<T>,
    /// Error description, omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// One page of items with cursor pagination metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Records of the current page, in sort order
    pub items: Vec<T>,
    /// Current sort state per column
    pub sort: Sort,
    /// Cursors, counts and navigation links
    pub pagination: PageResponse,
}

/// Handler error rendered as an `ApiResponse` with a matching status code.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        Self(DomainError::Pagination(err))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Log the failure and answer with an error envelope in `format`.
    pub fn render(self, format: ResponseFormat) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Rejected request: {}", self.0);
        }
        format.render(status, &ApiResponse::<()>::error(self.0.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.render(ResponseFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::<()>::error("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"], "boom");

        let json = serde_json::to_value(ApiResponse::success(3)).unwrap();
        assert_eq!(json["data"], 3);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn status_follows_error_origin() {
        assert_eq!(
            ApiError::from(PaginationError::ConflictingCursors).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DomainError::UnknownCursor("9".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(PaginationError::EmptyUrl).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
