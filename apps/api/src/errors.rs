use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    MalformedInput(String),

    #[error("Unsupported analysis type: {0}")]
    UnsupportedType(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI credits exhausted. Please add credits.")]
    CreditsExhausted,

    #[error("AI gateway error")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    Internal(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::RateLimited => AppError::RateLimited,
            LlmError::CreditsExhausted => AppError::CreditsExhausted,
            LlmError::Api { status, message } => AppError::Upstream {
                status,
                body: message,
            },
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedType(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::CreditsExhausted => StatusCode::PAYMENT_REQUIRED,
            AppError::Configuration(_)
            | AppError::MalformedInput(_)
            | AppError::Upstream { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream { status, body } => {
                tracing::error!("AI gateway error: status={status} body={body}");
            }
            AppError::RateLimited | AppError::CreditsExhausted => {
                tracing::warn!("Upstream limit reached: {self}");
            }
            AppError::UnsupportedType(kind) => {
                tracing::warn!("Rejected unsupported analysis type '{kind}'");
            }
            _ => tracing::error!("Error: {self}"),
        }

        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
