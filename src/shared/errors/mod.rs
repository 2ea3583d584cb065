//! Error Types
//!
//! Layered error types with proper HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Domain-level errors representing violated record invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Value at index {index} is not a finite number")]
    NonFiniteValue { index: usize },
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::NonFiniteValue { .. }) => "INVALID_VALUES",
            Self::Repository(RepositoryError::Database(_)) => "STORAGE_ERROR",
            Self::Repository(RepositoryError::Mapping(_)) => "DECODE_ERROR",
        }
    }

    /// Message safe to hand back to the client
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Domain(err) => err.to_string(),
            Self::Repository(RepositoryError::Database(_)) => "Failed to access the record store".to_string(),
            Self::Repository(RepositoryError::Mapping(_)) => "Failed to decode stored records".to_string(),
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UseCase(uc_error) => uc_error.status_code(),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message) = match &self {
            ApiError::UseCase(uc_error) => {
                if status.is_server_error() {
                    tracing::error!(error = %uc_error, "Request failed");
                }
                (uc_error.error_code().to_string(), uc_error.public_message())
            }
            ApiError::BadRequest(msg) => ("BAD_REQUEST".to_string(), msg.clone()),
            ApiError::MethodNotAllowed => (
                "METHOD_NOT_ALLOWED".to_string(),
                "Invalid request method".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

// serde_json error text only carries the position and expected type, never the payload
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {err}"))
    }
}
