//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`, `GET /url`, `GET /url/{id}` - Mapping API
//! - `GET  /redirect/{*id}`, `GET /redirect`   - Short link redirect
//! - `GET  /health`                           - Store health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::url_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
