//! Wishlist routes

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::{error::ApiError, middleware::AuthUser, state::AppState};

/// Request for adding a product to the wishlist
#[derive(Deserialize)]
pub struct AddWishlistRequest {
    pub product_id: Option<String>,
}

/// Get the authenticated user's wishlist
pub async fn get_wishlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state
        .wishlist_repository
        .get_user_wishlist(user.id)
        .await
        .map_err(|e| {
            error!("Failed to list wishlist for user {}: {}", user.id, e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({
        "items": items,
        "count": items.len(),
    })))
}

/// Add a product to the authenticated user's wishlist
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AddWishlistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(product_id) = payload.product_id else {
        return Err(ApiError::BadRequest("Product ID is required".to_string()));
    };

    let added = state
        .wishlist_repository
        .add_item(user.id, &product_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to add product {} to wishlist for user {}: {}",
                product_id, user.id, e
            );
            ApiError::InternalServerError
        })?;

    if !added {
        return Err(ApiError::Conflict("Product already in wishlist".to_string()));
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Product added to wishlist" })),
    ))
}

/// Remove a product from the authenticated user's wishlist
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .wishlist_repository
        .remove_item(user.id, &product_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to remove product {} from wishlist for user {}: {}",
                product_id, user.id, e
            );
            ApiError::InternalServerError
        })?;

    if !removed {
        return Err(ApiError::NotFound(
            "Product not found in wishlist".to_string(),
        ));
    }

    Ok(Json(json!({ "message": "Product removed from wishlist" })))
}
