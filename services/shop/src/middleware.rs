//! Authentication middleware for bearer token validation
//!
//! Protected routes carry this middleware as a `route_layer`. The resolved
//! identity is looked up fresh on every request so renamed or deleted
//! accounts take effect immediately; nothing is cached across requests.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::{error::ApiError, jwt::TokenError, state::AppState};

/// Authenticated user information attached to the request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
}

/// Extract the token from an `Authorization: Bearer <token>` header value
fn extract_bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    // Extract the Authorization header
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::MissingToken)?;

    let token = extract_bearer_token(auth_header).ok_or(ApiError::MissingToken)?;

    // Validate the token
    let claims = state.jwt_service.validate_token(token).map_err(|e| match e {
        TokenError::Expired => ApiError::ExpiredToken,
        TokenError::Invalid => ApiError::InvalidToken,
    })?;

    // Resolve the subject against the user store
    let user = state
        .user_repository
        .find_by_id(claims.sub)
        .await
        .map_err(|e| {
            error!("Failed to look up user {}: {}", claims.sub, e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::UserNotFound)?;

    // Attach the resolved identity to the request for downstream handlers
    req.extensions_mut().insert(AuthUser {
        id: user.id,
        email: user.email,
        name: user.name,
    });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("bearer abc"), None);
        assert_eq!(extract_bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(extract_bearer_token("abc.def.ghi"), None);
        assert_eq!(extract_bearer_token(""), None);
    }
}
