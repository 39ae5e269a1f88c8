//! Application state shared across handlers

use sqlx::PgPool;

use crate::{
    jwt::JwtService,
    repositories::{
        OrderRepository, ProductRepository, ReviewRepository, UserRepository, WishlistRepository,
    },
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: JwtService,
    pub user_repository: UserRepository,
    pub product_repository: ProductRepository,
    pub order_repository: OrderRepository,
    pub review_repository: ReviewRepository,
    pub wishlist_repository: WishlistRepository,
}
