use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Message returned when a request carries no usable resume.
pub const MISSING_RESUME: &str = "provide resume";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client supplied no usable input. Raised before any remote call.
    #[error("{0}")]
    InvalidInput(String),

    /// Request body exceeded the upload limit.
    #[error("resume too large")]
    PayloadTooLarge,

    /// Anything that went wrong while talking to the model.
    #[error(transparent)]
    Generation(#[from] LlmError),
}

impl AppError {
    pub fn missing_resume() -> Self {
        AppError::InvalidInput(MISSING_RESUME.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Generation(e) => {
                tracing::error!("Question generation failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_resume_is_bad_request() {
        let (status, body) = render(AppError::missing_resume()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "provide resume"}));
    }

    #[tokio::test]
    async fn test_payload_too_large() {
        let (status, body) = render(AppError::PayloadTooLarge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body, json!({"error": "resume too large"}));
    }

    #[tokio::test]
    async fn test_generation_failure_forwards_message() {
        let err = LlmError::Api {
            status: 403,
            message: "API key not valid.".to_string(),
        };
        let expected = err.to_string();
        let (status, body) = render(AppError::from(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], expected);
    }
}
