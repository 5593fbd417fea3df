use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scorekeep_core::errors::{ExError, ExErrorKind};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Command(#[from] ExError),
    #[error("command task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Command(e) if e.kind() == ExErrorKind::InvalidInput => {
                (StatusCode::BAD_REQUEST, e.message().to_string())
            }
            ApiError::Command(e) => {
                tracing::error!(
                    err.code = e.code(),
                    request_id = e.request_id().map(|r| r.as_str()).unwrap_or_default(),
                    "command failed: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
            ApiError::Join(e) => {
                tracing::error!("command task failed: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
        };
        (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
    }
}
