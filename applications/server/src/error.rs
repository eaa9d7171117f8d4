/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Missing or malformed required fields
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Duplicate unique field (username, email)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unknown email or password mismatch on login
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, expired, or orphaned bearer token
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Resource absent or not owned by the caller; deliberately
    /// indistinguishable so playlist ids cannot be probed
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<tunedeck_storage::StorageError> for ServerError {
    fn from(err: tunedeck_storage::StorageError) -> Self {
        match err {
            tunedeck_storage::StorageError::NotFound { entity, .. } => {
                ServerError::NotFound(format!("{entity} not found"))
            }
            tunedeck_storage::StorageError::Duplicate(field) => ServerError::Conflict(field),
            other => ServerError::Database(other.to_string()),
        }
    }
}

impl From<tunedeck_core::CoreError> for ServerError {
    fn from(err: tunedeck_core::CoreError) -> Self {
        match err {
            tunedeck_core::CoreError::NotFound { entity, .. } => {
                ServerError::NotFound(format!("{entity} not found"))
            }
            tunedeck_core::CoreError::Duplicate(field) => ServerError::Conflict(field),
            tunedeck_core::CoreError::InvalidInput(msg) => ServerError::Validation(msg),
            other => ServerError::Database(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Conflict(field) => (
                StatusCode::BAD_REQUEST,
                format!("User with this {field} already exists"),
            ),
            ServerError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            ServerError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::Jwt(ref e) => {
                tracing::warn!("JWT error: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            ServerError::Database(ref msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
