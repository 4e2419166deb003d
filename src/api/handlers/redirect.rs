//! Handlers for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::fmt::Write as _;
use tracing::warn;

use crate::state::AppState;

/// `GET /redirect/{*id}`: 301 to the stored URL, or to the fallback URL.
///
/// The catch-all capture keeps ids containing `/` on the fallback path
/// instead of a 404.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    redirect_to(&state, &id).await
}

/// `GET /redirect` with no id: always the fallback URL.
pub async fn redirect_without_id_handler(State(state): State<AppState>) -> Response {
    redirect_to(&state, "").await
}

async fn redirect_to(state: &AppState, id: &str) -> Response {
    let target = state.resolve_service.redirect(id).await;

    let location = match HeaderValue::try_from(escape_non_ascii(&target)) {
        Ok(value) => value,
        Err(_) => {
            // Stored URLs are verbatim user input and may hold bytes a header cannot carry.
            warn!(%id, "Stored URL is not a valid Location header, using fallback");
            HeaderValue::try_from(escape_non_ascii(state.resolve_service.fallback_url()))
                .unwrap_or_else(|_| HeaderValue::from_static("/"))
        }
    };

    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

/// Percent-encodes every byte at or above 0x80, leaving ASCII untouched.
///
/// `Köln` becomes `K%C3%B6ln`. Reserved ASCII such as `:`, `/`, `?` and `%`
/// keeps its meaning.
pub fn escape_non_ascii(url: &str) -> String {
    if url.is_ascii() {
        return url.to_string();
    }

    let mut escaped = String::with_capacity(url.len() + 16);
    for byte in url.bytes() {
        if byte.is_ascii() {
            escaped.push(byte as char);
        } else {
            let _ = write!(escaped, "%{:02X}", byte);
        }
    }
    escaped
}
