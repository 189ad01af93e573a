use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use vitalis_auth::error::AuthError;
use vitalis_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    /// Any failure while producing a report: missing template, HTML
    /// rendering, the PDF renderer, or writing the file.
    pub fn generation(e: impl Display) -> Self {
        ApiError::Internal {
            message: "Failed to generate report".to_string(),
            details: Some(e.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::Internal { message, details } => {
                tracing::error!(details = details.as_deref().unwrap_or(""), "internal error: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        (status, Json(ErrorBody { message, details })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UserExists => ApiError::BadRequest(e.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(e.to_string()),
            AuthError::TokenExpired | AuthError::InvalidToken(_) => {
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            other => ApiError::Internal {
                message: "Unexpected error occurred".to_string(),
                details: Some(other.to_string()),
            },
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal {
            message: "Unexpected error occurred".to_string(),
            details: Some(e.to_string()),
        }
    }
}
