//! Validated query-string extractor for Axum
//!
//! `ValidatedQuery<T>` works like `axum::extract::Query<T>`, but additionally
//! runs `validator::Validate::validate()` on the deserialized value.
//! Undecodable query strings are answered with 400, validation failures with
//! 422 and field-level details.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use super::ApiResponse;

/// An extractor that deserializes the query string and validates it.
///
/// # Usage
///
/// ```ignore
/// async fn handler(ValidatedQuery(query): ValidatedQuery<PageQuery>) {
///     // `query.limit` is within range here
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

/// Error type for `ValidatedQuery` extraction failures.
pub enum ValidatedQueryRejection {
    /// Query string could not be decoded.
    QueryError(QueryRejection),
    /// Validation failed.
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ValidatedQueryRejection {
    fn into_response(self) -> Response {
        match self {
            Self::QueryError(rejection) => {
                debug!("Rejected query string: {}", rejection.body_text());
                let body = ApiResponse::<()>::error(format!(
                    "Invalid query: {}",
                    rejection.body_text()
                ));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::ValidationError(errors) => {
                let mut field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            let msg = e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{:?}", e.code));
                            format!("{}: {}", field, msg)
                        })
                    })
                    .collect();
                field_errors.sort();

                let message = if field_errors.is_empty() {
                    "Validation failed".to_string()
                } else {
                    field_errors.join("; ")
                };

                let body = ApiResponse::<()>::error(message);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedQueryRejection::QueryError)?;

        value
            .validate()
            .map_err(ValidatedQueryRejection::ValidationError)?;

        Ok(ValidatedQuery(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
