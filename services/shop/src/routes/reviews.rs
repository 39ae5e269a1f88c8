//! Product review routes

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

/// Request for review creation
#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// Get all reviews for a product
pub async fn get_product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let reviews = state
        .review_repository
        .get_by_product(&product_id)
        .await
        .map_err(|e| {
            error!("Failed to list reviews for product {}: {}", product_id, e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({
        "reviews": reviews,
        "count": reviews.len(),
    })))
}

/// Create a review for a product
pub async fn create_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(product_id): Path<String>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(rating) = payload.rating else {
        return Err(ApiError::BadRequest(
            "Rating is required and must be a number".to_string(),
        ));
    };

    if !(1..=5).contains(&rating) {
        return Err(ApiError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    let review_id = state
        .review_repository
        .create(&product_id, user.id, rating, payload.comment.as_deref())
        .await
        .map_err(|e| {
            error!(
                "Failed to create review for product {} by user {}: {}",
                product_id, user.id, e
            );
            ApiError::BadRequest("Failed to create review".to_string())
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Review created successfully",
            "review_id": review_id,
        })),
    ))
}
