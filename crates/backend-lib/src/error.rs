// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("Game name in body ({body}) does not match path ({path})")]
    NameMismatch { path: String, body: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::GameNotFound(_) => StatusCode::NOT_FOUND,
            AppError::NameMismatch { .. } | AppError::InvalidInput(_) | AppError::Json(_) => {
                StatusCode::BAD_REQUEST
            },
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::GameNotFound(_) => "GAME_001",
            AppError::NameMismatch { .. } => "GAME_002",
            AppError::InvalidInput(_) => "VAL_001",
            AppError::Json(_) => "JSON_001",
        }
    }

    /// Get a sanitized message suitable for production use
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::GameNotFound(_) => "Resource not found".to_string(),
            AppError::NameMismatch { .. } => "Resource name does not match request path".to_string(),
            AppError::InvalidInput(_) => "Invalid input provided".to_string(),
            AppError::Json(_) => "Invalid request format".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        let body = serde_json::json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
