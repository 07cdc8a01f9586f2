//! Error types for the grocery server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use grocery_types::{Message, RecordId};
use thiserror::Error;

/// Failures of the storage layer
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store is unreachable or unwritable at startup
    #[error("Storage initialization failed: {0}")]
    Init(String),

    #[error("Storage read failed: {0}")]
    Read(#[source] sqlx::Error),

    #[error("Storage write failed: {0}")]
    Write(#[source] sqlx::Error),
}

/// Errors a handler turns into an HTTP response
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Validation(String),

    #[error("User not found: {0}")]
    UnknownUser(RecordId),

    #[error("Invalid user id: {0}")]
    InvalidUserId(RecordId),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Storage(e) => {
                tracing::error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Validation(reason) => (StatusCode::UNPROCESSABLE_ENTITY, reason.clone()),
            ApiError::UnknownUser(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            ApiError::InvalidUserId(_) => (
                StatusCode::BAD_REQUEST,
                "user_id must be a non-negative integer".to_string(),
            ),
        };

        (status, Json(Message::new(message))).into_response()
    }
}
