//! Content negotiation for response bodies
//!
//! List endpoints answer in JSON by default and in XML when the client asks
//! for it through `Accept`. Field names are the same in both formats.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// Root element of XML bodies.
const XML_ROOT: &str = "response";

/// Body format picked from the request's `Accept` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// The first JSON or XML media type listed in `Accept` wins. Anything
    /// else, `*/*` included, falls back to JSON.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .filter_map(|range| range.split(';').next())
            .map(str::trim)
            .find_map(|media| {
                if media.eq_ignore_ascii_case("application/json") {
                    Some(ResponseFormat::Json)
                } else if media.eq_ignore_ascii_case("application/xml")
                    || media.eq_ignore_ascii_case("text/xml")
                {
                    Some(ResponseFormat::Xml)
                } else {
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Serialize `body` in this format with the given status.
    pub fn render<T: Serialize>(self, status: StatusCode, body: &T) -> Response {
        match self {
            ResponseFormat::Json => (status, Json(body)).into_response(),
            ResponseFormat::Xml => match quick_xml::se::to_string_with_root(XML_ROOT, body) {
                Ok(xml) => (
                    status,
                    [(CONTENT_TYPE, HeaderValue::from_static("application/xml"))],
                    xml,
                )
                    .into_response(),
                Err(e) => {
                    error!("Failed to encode XML response: {}", e);
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
        }
    }
}

impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ResponseFormat::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn picks_first_supported_media_type() {
        assert_eq!(ResponseFormat::from_headers(&HeaderMap::new()), ResponseFormat::Json);
        assert_eq!(ResponseFormat::from_headers(&accept("*/*")), ResponseFormat::Json);
        assert_eq!(
            ResponseFormat::from_headers(&accept("application/xml")),
            ResponseFormat::Xml
        );
        assert_eq!(
            ResponseFormat::from_headers(&accept("text/html, text/xml;q=0.9")),
            ResponseFormat::Xml
        );
        assert_eq!(
            ResponseFormat::from_headers(&accept("application/json, application/xml;q=0.5")),
            ResponseFormat::Json
        );
    }

    #[derive(Serialize)]
    struct Sample {
        total: i64,
        next_uri: Option<String>,
        cursor_range: Vec<String>,
    }

    #[tokio::test]
    async fn renders_xml_with_field_elements() {
        let body = Sample {
            total: 3,
            next_uri: Some("/h?limit=2".into()),
            cursor_range: vec!["1".into(), "2".into()],
        };
        let resp = ResponseFormat::Xml.render(StatusCode::OK, &body);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/xml");

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let xml = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(xml.starts_with("<response>"));
        assert!(xml.contains("<total>3</total>"));
        assert!(xml.contains("<cursor_range>1</cursor_range><cursor_range>2</cursor_range>"));
        assert!(xml.contains("<next_uri>/h?limit=2</next_uri>"));
    }
}
