use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Rejections raised when strict validation is enabled. In lenient mode the
/// same conditions are ignored rather than surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown trait category '{0}'")]
    UnknownCategory(String),

    #[error("Unknown question reference '{0}'")]
    UnknownQuestion(String),

    #[error("Option '{option}' is not offered by question '{question_id}'")]
    UnknownOption { question_id: String, option: String },
}

impl ValidationError {
    fn code(&self) -> &'static str {
        match self {
            ValidationError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            ValidationError::UnknownQuestion(_) => "UNKNOWN_QUESTION",
            ValidationError::UnknownOption { .. } => "UNKNOWN_OPTION",
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid quiz state: {0}")]
    InvalidState(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.code(), e.to_string()),
            AppError::InvalidState(msg) => {
                tracing::warn!("Rejected quiz transition: {msg}");
                (StatusCode::CONFLICT, "INVALID_STATE", msg.clone())
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
