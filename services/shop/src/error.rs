//! Custom error types for the shop service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the shop service
#[derive(Error, Debug)]
pub enum ApiError {
    /// No bearer token was presented
    #[error("Authentication required")]
    MissingToken,

    /// The presented token has expired
    #[error("Token expired")]
    ExpiredToken,

    /// The presented token failed signature or structural validation
    #[error("Invalid token")]
    InvalidToken,

    /// The token was valid but the referenced account no longer exists
    #[error("Invalid token or user not found")]
    UserNotFound,

    /// Login with an unknown email or a wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict with existing state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] common::error::DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingToken => {
                (StatusCode::UNAUTHORIZED, "Authentication required".to_string())
            }
            ApiError::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token expired".to_string()),
            ApiError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
            ApiError::UserNotFound => (
                StatusCode::UNAUTHORIZED,
                "Invalid token or user not found".to_string(),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
        };

        let body = Json(json!({
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_unauthorized() {
        for error in [
            ApiError::MissingToken,
            ApiError::ExpiredToken,
            ApiError::InvalidToken,
            ApiError::UserNotFound,
            ApiError::InvalidCredentials,
        ] {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_client_errors_map_to_expected_statuses() {
        let response = ApiError::BadRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Conflict("exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = ApiError::InternalServerError.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
