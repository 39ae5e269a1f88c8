//! Product catalog routes
//!
//! Reads are public; mutations require any authenticated identity (the shop
//! has no role tiers).

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::{
    error::ApiError,
    middleware::AuthUser,
    models::{NewProduct, UpdateProduct},
    state::AppState,
};

/// Query parameters for product listings
#[derive(Deserialize)]
pub struct ProductListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request for product creation; name, price, and category are mandatory
#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub is_on_sale: Option<bool>,
    pub sizes: Option<Vec<String>>,
    pub discount: Option<f64>,
    pub deal_type: Option<String>,
    pub deal_ends: Option<String>,
    pub stock_left: Option<i32>,
    pub tags: Option<Vec<String>>,
}

/// Get all products with optional pagination
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .product_repository
        .get_all(query.limit, query.offset)
        .await
        .map_err(|e| {
            error!("Failed to list products: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({
        "products": products,
        "count": products.len(),
    })))
}

/// Get a product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .product_repository
        .get_by_id(&id)
        .await
        .map_err(|e| {
            error!("Failed to fetch product {}: {}", id, e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(json!({ "product": product })))
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(name), Some(price), Some(category)) =
        (payload.name, payload.price, payload.category)
    else {
        return Err(ApiError::BadRequest(
            "Name, price and category are required".to_string(),
        ));
    };

    let new_product = NewProduct {
        id: payload.id,
        name,
        description: payload.description,
        price,
        original_price: payload.original_price,
        category,
        image: payload.image,
        rating: payload.rating,
        is_on_sale: payload.is_on_sale,
        sizes: payload.sizes,
        discount: payload.discount,
        deal_type: payload.deal_type,
        deal_ends: payload.deal_ends,
        stock_left: payload.stock_left,
        tags: payload.tags,
    };

    let product_id = state
        .product_repository
        .create(&new_product)
        .await
        .map_err(|e| {
            error!("Failed to create product: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Product created successfully",
            "product_id": product_id,
        })),
    ))
}

/// Update an existing product
pub async fn update_product(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = state
        .product_repository
        .update(&id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to update product {}: {}", id, e);
            ApiError::InternalServerError
        })?;

    if !updated {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }

    let product = state
        .product_repository
        .get_by_id(&id)
        .await
        .map_err(|e| {
            error!("Failed to reload product {}: {}", id, e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::InternalServerError)?;

    Ok(Json(json!({
        "message": "Product updated successfully",
        "product": product,
    })))
}
