use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::profile::store::StoreError;
use crate::resume::extractor::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Profile store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::Empty | ExtractionError::TooLarge { .. } => {
                AppError::Validation(err.to_string())
            }
            ExtractionError::UnsupportedFormat(msg) => AppError::UnsupportedFormat(msg),
            ExtractionError::ExtractionFailed(msg) => AppError::ExtractionFailed(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                msg.clone(),
            ),
            AppError::ExtractionFailed(msg) => {
                tracing::warn!("Extraction failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    "Failed to parse resume. Please try again.".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "NETWORK_OR_API_ERROR",
                    "We couldn't complete the analysis. Please try again.".to_string(),
                )
            }
            AppError::Store(e) => {
                tracing::error!("Profile store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_errors_map_to_distinct_kinds() {
        assert!(matches!(
            AppError::from(ExtractionError::UnsupportedFormat("x".into())),
            AppError::UnsupportedFormat(_)
        ));
        assert!(matches!(
            AppError::from(ExtractionError::ExtractionFailed("x".into())),
            AppError::ExtractionFailed(_)
        ));
        assert!(matches!(
            AppError::from(ExtractionError::Empty),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::UnsupportedFormat("x".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (
                AppError::ExtractionFailed("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::Llm(LlmError::EmptyContent), StatusCode::BAD_GATEWAY),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
