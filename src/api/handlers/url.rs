//! Handlers for the `/url` endpoints: shorten, get and list.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::url::{ListUrlResponse, ShortenRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": "q9Zx-3_A", "url": "https://example.com/page" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or `url` is empty.
/// Returns 500 Internal Server Error if id generation or the insert fails,
/// including the rare id collision, which is not retried.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state.shorten_service.shorten(payload.url).await?;

    Ok(Json(UrlResponse::from(mapping)))
}

/// Retrieves the mapping for a short id.
///
/// # Endpoint
///
/// `GET /url/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id was never stored.
pub async fn get_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let mapping = state.resolve_service.get(&id).await?;

    Ok(Json(UrlResponse::from(mapping)))
}

/// Lists every stored mapping, ordered by id descending.
///
/// # Endpoint
///
/// `GET /url`
///
/// # Response
///
/// ```json
/// { "urls": [ { "id": "zz0_abcd", "url": "https://..." }, ... ] }
/// ```
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<ListUrlResponse>, AppError> {
    let urls = state
        .resolve_service
        .list_all()
        .await?
        .into_iter()
        .map(UrlResponse::from)
        .collect();

    Ok(Json(ListUrlResponse { urls }))
}
