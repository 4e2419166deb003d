//! Application error type and its HTTP representation.
//!
//! Every failure inside the service is an [`AppError`]. Variants follow the
//! failure taxonomy of the shortener: entropy failures, store write failures,
//! missing mappings, and store connectivity failures, plus input validation.
//! Errors propagate unchanged up to the HTTP boundary, where
//! [`IntoResponse`] turns them into a JSON error body.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request was rejected before reaching the store (e.g. empty URL).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No mapping exists for the requested identifier.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The OS entropy source could not supply random bytes.
    #[error("{message}")]
    RandomSourceUnavailable { message: String, details: Value },

    /// The store rejected an insert, including identifier collisions.
    #[error("{message}")]
    StoreWriteFailed { message: String, details: Value },

    /// The store could not be reached or did not answer.
    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn random_source_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::RandomSourceUnavailable {
            message: message.into(),
            details,
        }
    }

    pub fn store_write_failed(message: impl Into<String>, details: Value) -> Self {
        Self::StoreWriteFailed {
            message: message.into(),
            details,
        }
    }

    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }

    /// Stable error code used in API responses and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::RandomSourceUnavailable { .. } => "random_source_unavailable",
            AppError::StoreWriteFailed { .. } => "store_write_failed",
            AppError::StoreUnavailable { .. } => "store_unavailable",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RandomSourceUnavailable { .. }
            | AppError::StoreWriteFailed { .. }
            | AppError::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Consumes the error into its serializable payload.
    pub fn to_error_info(self) -> ErrorInfo {
        let code = self.code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::RandomSourceUnavailable { message, details }
            | AppError::StoreWriteFailed { message, details }
            | AppError::StoreUnavailable { message, details } => (message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_default();
        AppError::bad_request("Validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

/// Classifies an `sqlx` error raised while inserting a mapping.
///
/// Anything the database itself reports (unique violations above all) is a
/// write failure; transport-level errors mean the store is unavailable.
pub fn map_sqlx_write_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::store_write_failed(
                "Identifier already exists",
                json!({ "constraint": db.constraint() }),
            );
        }

        return AppError::store_write_failed(
            "Failed to insert mapping",
            json!({ "reason": db.message() }),
        );
    }

    map_sqlx_read_error(e)
}

/// Classifies an `sqlx` error raised while reading mappings.
///
/// Errors reported by the database keep their SQLSTATE in `details` so they
/// can be told apart from connection failures.
pub fn map_sqlx_read_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        return AppError::store_unavailable(
            "Mapping store rejected the query",
            json!({ "sqlstate": db.code(), "reason": db.message() }),
        );
    }

    AppError::store_unavailable("Mapping store unavailable", json!({ "reason": e.to_string() }))
}
