//! Authentication routes: registration, login, and profile management

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::{
    error::ApiError,
    middleware::AuthUser,
    models::UserResponse,
    password::{hash_password, verify_password},
    state::AppState,
    validation::{validate_email, validate_password},
};

/// Request for user registration
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Request for user login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request for profile updates
#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Response carrying a session token and the user view
#[derive(Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

/// User registration endpoint
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    validate_email(&email).map_err(ApiError::BadRequest)?;
    validate_password(&password).map_err(ApiError::BadRequest)?;

    let password_hash = hash_password(&password).map_err(|e| {
        error!("Failed to hash password: {}", e);
        ApiError::InternalServerError
    })?;

    let user = state
        .user_repository
        .create(&email, &password_hash, payload.name.as_deref())
        .await
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::Conflict("User with this email already exists".to_string()))?;

    let token = state.jwt_service.generate_token(user.id).map_err(|e| {
        error!("Failed to generate token: {}", e);
        ApiError::InternalServerError
    })?;

    info!("Registered user {}", user.id);

    let response = AuthResponse {
        message: "User registered successfully".to_string(),
        token,
        user: user.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    validate_email(&email).map_err(ApiError::BadRequest)?;

    let user = state
        .user_repository
        .find_by_email(&email)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt_service.generate_token(user.id).map_err(|e| {
        error!("Failed to generate token: {}", e);
        ApiError::InternalServerError
    })?;

    info!("User {} logged in", user.id);

    let response = AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: user.into(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Get the authenticated user's profile
pub async fn get_profile(
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(json!({
        "user": {
            "id": user.id,
            "email": user.email,
            "name": user.name,
        }
    })))
}

/// Update the authenticated user's profile (name and/or email)
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.name.is_none() && payload.email.is_none() {
        return Err(ApiError::BadRequest("No data provided".to_string()));
    }

    let updated = state
        .user_repository
        .update(user.id, payload.name.as_deref(), payload.email.as_deref())
        .await
        .map_err(|e| {
            error!("Failed to update profile for user {}: {}", user.id, e);
            ApiError::InternalServerError
        })?;

    if !updated {
        return Err(ApiError::BadRequest("Failed to update profile".to_string()));
    }

    let updated_user = state
        .user_repository
        .find_by_id(user.id)
        .await
        .map_err(|e| {
            error!("Failed to reload user {}: {}", user.id, e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::InternalServerError)?;

    Ok(Json(json!({
        "message": "Profile updated successfully",
        "user": UserResponse::from(updated_user),
    })))
}
