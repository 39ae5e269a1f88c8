//! Repositories for database operations

pub mod order;
pub mod product;
pub mod review;
pub mod user;
pub mod wishlist;

pub use order::{OrderError, OrderRepository};
pub use product::ProductRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
pub use wishlist::WishlistRepository;
