use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Why the remote model produced no analysis.
#[derive(Debug, Error)]
pub enum UpstreamFailure {
    #[error("model call failed: {0}")]
    Call(#[from] LlmError),

    #[error("model returned no text (reason: {})", reason.as_deref().unwrap_or("unspecified"))]
    NoText { reason: Option<String> },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload too large")]
    UploadTooLarge,

    #[error("Origin not allowed")]
    OriginNotAllowed,

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamFailure),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UploadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Resume exceeds the maximum upload size".to_string(),
            ),
            AppError::OriginNotAllowed => {
                (StatusCode::FORBIDDEN, "Not allowed by CORS".to_string())
            }
            AppError::Upstream(failure) => {
                tracing::error!("Upstream error: {failure}");
                let message = match failure {
                    UpstreamFailure::NoText { .. } => "AI analysis failed: No response from AI.",
                    UpstreamFailure::Call(_) => "AI analysis failed. Please try again.",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error. Please try again.".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
