//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (CORS, timeout, request ID, tracing, panic capture)
//! - Bind server to listener and shut down gracefully

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::Catalog;
use crate::config::{CatalogConfig, CorsConfig};
use crate::http::handlers::{
    health_handler, not_found_handler, panic_response, query_handler, search_handler,
    timeout_failure,
};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, X_REQUEST_ID};
use crate::lifecycle::shutdown::wait_for_shutdown;
use crate::observability::metrics;
use crate::search::SearchEngine;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub search: SearchEngine,
}

/// HTTP server for the catalog API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `catalog`.
    pub fn new(config: CatalogConfig, catalog: Catalog) -> Self {
        metrics::record_catalog_size(catalog.len());

        let state = AppState {
            catalog,
            search: SearchEngine::new(config.search.mode, config.search.max_pattern_len),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &CatalogConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/", post(query_handler))
            .route("/search", get(search_handler))
            .route("/health", get(health_handler))
            .fallback(not_found_handler)
            .with_state(state)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(build_cors_layer(&config.cors));

        with_request_timeout(router, Duration::from_secs(config.timeouts.request_secs))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The configured router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until Ctrl+C or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Time-limit every request. A timed-out request gets the failure body.
#[allow(deprecated)]
fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::map_response(timeout_failure))
}

/// Builds the CORS layer. An empty origin list adds no CORS headers.
pub fn build_cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(X_REQUEST_ID),
        ])
        .expose_headers([HeaderName::from_static(X_REQUEST_ID)])
        .max_age(Duration::from_secs(cors_config.max_age_seconds));

    let origins = &cors_config.allowed_origins;
    if origins.is_empty() {
        return cors;
    }
    if origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::error!(origin = %origin, "Invalid CORS origin; skipping");
                None
            }
        })
        .collect();

    tracing::info!(origins = ?origins, "CORS configured");
    cors.allow_origin(AllowOrigin::list(allowed))
}
