use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::questions::provider::AssembleError;
use crate::session::AnswerError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend judged the role invalid. The only user-facing failure:
    /// the message is surfaced verbatim and the caller must start over
    /// with a fresh role description.
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Session incomplete: {0}")]
    Incomplete(String),

    #[error("Question supply error: {0}")]
    QuestionSupply(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AssembleError> for AppError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::InvalidRole(message) => AppError::InvalidRole(message),
            AssembleError::Exhausted => AppError::QuestionSupply(err.to_string()),
        }
    }
}

impl From<AnswerError> for AppError {
    fn from(err: AnswerError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidRole(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_ROLE", msg.clone())
            }
            AppError::Incomplete(msg) => (StatusCode::CONFLICT, "SESSION_INCOMPLETE", msg.clone()),
            AppError::QuestionSupply(msg) => {
                tracing::error!("question supply error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "QUESTION_SUPPLY_ERROR",
                    "Failed to assemble a question set".to_string(),
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
