//! # HTTP API Errors
//!
//! Maps store and validation failures onto status codes and JSON bodies.
//! A missing album answers with a `message` body; every other failure
//! answers with an `error` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::album::{StoreError, ValidationError};

/// Body of the 404 response
pub const NOT_FOUND_MESSAGE: &str = "Album not found.";

/// Result type for album handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No album with the requested id
    #[error("Album not found.")]
    NotFound,

    /// Request body failed validation
    #[error("{0}")]
    MalformedInput(String),

    /// Insert reused an existing id
    #[error("Album with id '{0}' already exists.")]
    Conflict(String),

    /// Store failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::DuplicateId(id) => ApiError::Conflict(id),
            poisoned @ StoreError::LockPoisoned => ApiError::Internal(poisoned.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::MalformedInput(err.to_string())
    }
}

/// `{"message": ...}` body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"error": ...}` body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound => {
                (status, Json(MessageResponse::new(NOT_FOUND_MESSAGE))).into_response()
            }
            other => (
                status,
                Json(ErrorResponse {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
