use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod jwt;
mod middleware;
mod models;
mod password;
mod repositories;
mod routes;
mod state;
mod validation;

use common::database::{DatabaseConfig, health_check, init_pool, init_schema};

use crate::{
    jwt::{JwtConfig, JwtService},
    repositories::{
        OrderRepository, ProductRepository, ReviewRepository, UserRepository, WishlistRepository,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting shop service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Bootstrap the schema so a fresh database is immediately usable
    init_schema(&pool).await?;

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env()?;
    let jwt_service = JwtService::new(jwt_config);

    // Initialize repositories
    let user_repository = UserRepository::new(pool.clone());
    let product_repository = ProductRepository::new(pool.clone());
    let order_repository = OrderRepository::new(pool.clone());
    let review_repository = ReviewRepository::new(pool.clone());
    let wishlist_repository = WishlistRepository::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        jwt_service,
        user_repository,
        product_repository,
        order_repository,
        review_repository,
        wishlist_repository,
    };

    info!("Shop service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Shop service listening on 0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
