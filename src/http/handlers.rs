//! Query, search and health handlers.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;
use std::time::Instant;

use crate::http::request::{decode_query_input, request_id};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::query::{self, Query as CatalogQuery};
use crate::search::SearchParams;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub vehicles: usize,
}

/// `POST /`: filter, sort and paginate.
pub async fn query_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let start = Instant::now();
    let request_id = request_id(&headers);

    let input = decode_query_input(&body).inspect_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Rejected query body");
        metrics::record_request("query", "rejected", start);
    })?;
    let query = CatalogQuery::from(input);

    let result = query::evaluate(&state.catalog, &query);

    tracing::debug!(
        request_id = %request_id,
        total_items = result.total_items,
        page = result.current_page,
        returned = result.items.len(),
        "Query served"
    );
    metrics::record_result_items("query", result.items.len());
    metrics::record_request("query", "ok", start);

    Ok(Json(result).into_response())
}

/// `GET /search?search=<term>`: free-text search.
pub async fn search_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let start = Instant::now();
    let request_id = request_id(&headers);

    let Query(params) = params.map_err(|e| {
        metrics::record_request("search", "rejected", start);
        ApiError::BadRequest(e.body_text())
    })?;

    let result = state
        .search
        .search(&state.catalog, &params.search)
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, term = %params.search, error = %e, "Rejected search term");
            metrics::record_request("search", "rejected", start);
        })?;

    tracing::debug!(
        request_id = %request_id,
        term = %params.search,
        total_items = result.total_items,
        "Search served"
    );
    metrics::record_result_items("search", result.total_items);
    metrics::record_request("search", "ok", start);

    Ok(Json(result).into_response())
}

/// `GET /health`.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        vehicles: state.catalog.len(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

/// Turn a handler panic into the generic failure response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail = %detail, "Handler panicked");
    ApiError::Internal.into_response()
}

/// The timeout layer answers 408 with an empty body; give it the failure body.
pub async fn timeout_failure(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    tracing::warn!("Request timed out");
    ApiError::Timeout.into_response()
}
