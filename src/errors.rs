// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Comprehensive error enum for all possible failures
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown submission category: {0}")]
    InvalidCategory(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Convert BackendError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for BackendError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            BackendError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            BackendError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            BackendError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            BackendError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            BackendError::InvalidCategory(_) => (StatusCode::BAD_REQUEST, "INVALID_CATEGORY"),
            BackendError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            BackendError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            BackendError::ExternalApiError(_) => (StatusCode::BAD_GATEWAY, "EXTERNAL_API_ERROR"),
            BackendError::RateLimitExceeded => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMIT_EXCEEDED")
            }
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            BackendError::NotFound(_) => StatusCode::NOT_FOUND,
            BackendError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BackendError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            BackendError::ValidationError(_) => StatusCode::BAD_REQUEST,
            BackendError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
            BackendError::Unauthorized => StatusCode::UNAUTHORIZED,
            BackendError::Forbidden => StatusCode::FORBIDDEN,
            BackendError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            BackendError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}
