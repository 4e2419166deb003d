//! API route configuration.

use crate::api::handlers::{
    get_url_handler, list_urls_handler, redirect_handler, redirect_without_id_handler,
    shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Mapping and redirect routes.
///
/// # Endpoints
///
/// - `POST /url`            - Shorten a URL
/// - `GET  /url`            - List all mappings (id descending)
/// - `GET  /url/{id}`       - Look up a mapping
/// - `GET  /redirect/{*id}` - 301 to the stored URL, or to the fallback URL
/// - `GET  /redirect`       - 301 to the fallback URL
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(shorten_handler).get(list_urls_handler))
        .route("/url/{id}", get(get_url_handler))
        .route("/redirect", get(redirect_without_id_handler))
        .route("/redirect/{*id}", get(redirect_handler))
}
