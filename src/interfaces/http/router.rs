//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, PaginatedResponse};
use super::modules::health::{self, HealthResponse, HealthState};
use super::modules::histories::{self, HistoryAppState, HistoryDto};
use crate::domain::pagination::{PageResponse, Sort, SortDirection, SortKey};
use crate::domain::HistoryRepository;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, histories::list_histories),
    components(schemas(
        ApiResponse<String>,
        PaginatedResponse<HistoryDto>,
        HistoryDto,
        HealthResponse,
        PageResponse,
        Sort,
        SortKey,
        SortDirection,
    )),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Histories", description = "Job run histories with cursor pagination")
    )
)]
pub struct ApiDoc;

/// Build the REST router around a history data source.
pub fn create_api_router(repo: Arc<dyn HistoryRepository>) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            repo: Arc::clone(&repo),
            started_at: Arc::new(Instant::now()),
        });

    let history_routes = Router::new()
        .route("/api/v1/histories", get(histories::list_histories))
        .with_state(HistoryAppState { repo });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(history_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
