//! Shop service routes

use axum::{
    Json, Router,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{middleware::auth_middleware, state::AppState};

pub mod auth;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod wishlist;

/// Create the router for the shop service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(
            "/api/auth/profile",
            get(auth::get_profile).put(auth::update_profile),
        )
        .route("/api/products", post(products::create_product))
        .route("/api/products/:id", put(products::update_product))
        .route(
            "/api/orders",
            get(orders::get_user_orders).post(orders::create_order),
        )
        .route("/api/orders/:id", get(orders::get_order))
        .route(
            "/api/wishlist",
            get(wishlist::get_wishlist).post(wishlist::add_to_wishlist),
        )
        .route(
            "/api/wishlist/:product_id",
            delete(wishlist::remove_from_wishlist),
        )
        .route(
            "/api/reviews/product/:product_id",
            post(reviews::create_review),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/products", get(products::get_products))
        .route("/api/products/:id", get(products::get_product))
        .route(
            "/api/reviews/product/:product_id",
            get(reviews::get_product_reviews),
        )
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "shop-service"
    }))
}
