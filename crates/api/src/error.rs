use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sakila_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{"error": "<message>"}`. Server failures carry a fixed
/// per-endpoint message for the client; the underlying cause only goes to the
/// log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sakila_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx (connect, acquire, execute or decode).
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A path or query value that does not parse.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other failure while serving the request.
    #[error("{message}: {detail}")]
    InternalError {
        message: &'static str,
        detail: String,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` that tags a sqlx error with the endpoint's
    /// client-facing message.
    pub fn database(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Database { message, source }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Lookup returned no row");
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database { message, source } => {
                tracing::error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, (*message).to_string())
            }
            AppError::InternalError { message, detail } => {
                tracing::error!(error = %detail, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, (*message).to_string())
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
