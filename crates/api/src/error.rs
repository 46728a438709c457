use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use matjib_core::error::CoreError;
use matjib_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent `{"error", "code"}` JSON bodies.
///
/// Status mapping is uniform across create and list paths: client input
/// problems are 4xx, every storage failure other than a uniqueness conflict
/// is 500 with a sanitized message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `matjib_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence failure on a write path.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A persistence failure while listing records of `what`.
    #[error("Failed to fetch {what}: {source}")]
    FetchFailed {
        what: &'static str,
        #[source]
        source: StoreError,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut field: Option<String> = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidField { field: name, reason } => {
                    field = Some(name.clone());
                    (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        format!("{name} {reason}"),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },

            // --- Storage errors ---
            AppError::Store(err) => classify_store_error(err),
            AppError::FetchFailed { what, source } => {
                tracing::error!(error = %source, what, "Failed to fetch records");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "FETCH_FAILED",
                    format!("Failed to fetch {what}"),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(field) = field {
            body["field"] = json!(field);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a write-path storage error into an HTTP status, error code, and message.
///
/// - Unique constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        StoreError::Unavailable(msg) => {
            tracing::error!(error = %msg, "Storage unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
        StoreError::Database(db_err) => {
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}
