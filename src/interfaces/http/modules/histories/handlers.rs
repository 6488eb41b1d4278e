//! History listing handler

use std::sync::Arc;

use axum::extract::{OriginalUri, State};
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use tracing::info;

use super::dto::HistoryDto;
use crate::domain::{HistoryRepository, PageResponse};
use crate::interfaces::http::common::{
    ApiError, ApiResponse, PaginatedResponse, PageQuery, ResponseFormat, ValidatedQuery,
};

/// History handler state
#[derive(Clone)]
pub struct HistoryAppState {
    pub repo: Arc<dyn HistoryRepository>,
}

/// List job run histories
///
/// Cursor paginated. Pass `starting_after` to move forward or
/// `ending_before` to move back, never both. `pagination.next_uri` and
/// `pagination.previous_uri` are ready-made links for the neighbouring pages.
/// Answers in XML when `Accept` asks for `application/xml`.
#[utoipa::path(
    get,
    path = "/api/v1/histories",
    tag = "Histories",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of histories", content(
            (ApiResponse<PaginatedResponse<HistoryDto>> = "application/json"),
            (ApiResponse<PaginatedResponse<HistoryDto>> = "application/xml")
        )),
        (status = 400, description = "Malformed sort, conflicting or unknown cursor", body = ApiResponse<String>),
        (status = 422, description = "Limit out of range", body = ApiResponse<String>)
    )
)]
pub async fn list_histories(
    State(state): State<HistoryAppState>,
    OriginalUri(uri): OriginalUri,
    format: ResponseFormat,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> Response {
    match fetch_page(&state, uri, query).await {
        Ok(page) => format.render(StatusCode::OK, &ApiResponse::success(page)),
        Err(e) => e.render(format),
    }
}

async fn fetch_page(
    state: &HistoryAppState,
    uri: Uri,
    query: PageQuery,
) -> Result<PaginatedResponse<HistoryDto>, ApiError> {
    let mut request = query.into_page_request(uri.clone());
    request.validate()?;
    let sort = request.parsed_sort()?;
    request.cursor()?;

    let page = state.repo.find_page(&request, &sort).await?;

    let pagination = PageResponse::from_request(
        &request,
        page.total as i64,
        page.records.len() as i64,
        page.cursor_range(),
    )
    .with_navigation(page.has_prev, page.has_next, &uri);

    info!(
        sort = %request.sort,
        limit = request.limit,
        yielded = pagination.yielded,
        total = pagination.total,
        "Listed histories"
    );

    Ok(PaginatedResponse {
        items: page.records.into_iter().map(HistoryDto::from).collect(),
        sort,
        pagination,
    })
}
