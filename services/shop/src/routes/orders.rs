//! Order routes
//!
//! All order routes are owner-scoped: a caller can only ever see or create
//! their own orders, and somebody else's order is indistinguishable from a
//! missing one.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::{
    error::ApiError,
    middleware::AuthUser,
    models::NewOrderItem,
    repositories::OrderError,
    state::AppState,
};

/// Request for order creation
#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub items: Option<Vec<NewOrderItem>>,
    pub total_amount: Option<f64>,
    pub shipping_address: Option<String>,
    pub payment_method: Option<String>,
}

/// Get all orders for the authenticated user, newest first
pub async fn get_user_orders(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let orders = state
        .order_repository
        .get_user_orders(user.id)
        .await
        .map_err(|e| {
            error!("Failed to list orders for user {}: {}", user.id, e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({
        "orders": orders,
        "count": orders.len(),
    })))
}

/// Get a single order with its items
pub async fn get_order(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(order_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state
        .order_repository
        .get_by_id(order_id, Some(user.id))
        .await
        .map_err(|e| {
            error!("Failed to fetch order {}: {}", order_id, e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))?;

    Ok(Json(json!({ "order": order })))
}

/// Create an order from the submitted items
pub async fn create_order(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(items), Some(total_amount)) = (payload.items, payload.total_amount) else {
        return Err(ApiError::BadRequest(
            "Items and total amount are required".to_string(),
        ));
    };

    if items.is_empty() {
        return Err(ApiError::BadRequest(
            "Items must be a non-empty array".to_string(),
        ));
    }

    let order_id = state
        .order_repository
        .create(
            user.id,
            &items,
            total_amount,
            payload.shipping_address.as_deref(),
            payload.payment_method.as_deref(),
        )
        .await
        .map_err(|e| match e {
            OrderError::EmptyItems => {
                ApiError::BadRequest("Items must be a non-empty array".to_string())
            }
            OrderError::Persistence(cause) => {
                error!("Failed to create order for user {}: {}", user.id, cause);
                ApiError::BadRequest("Failed to create order".to_string())
            }
        })?;

    let order = state
        .order_repository
        .get_by_id(order_id, Some(user.id))
        .await
        .map_err(|e| {
            error!("Failed to reload order {}: {}", order_id, e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::InternalServerError)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Order created successfully",
            "order": order,
        })),
    ))
}
