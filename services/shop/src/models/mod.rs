//! Shop service models

pub mod order;
pub mod product;
pub mod review;
pub mod user;
pub mod wishlist;

// Re-export for convenience
pub use order::{NewOrderItem, Order, OrderItemDetail, OrderStatus, OrderSummary};
pub use product::{NewProduct, Product, UpdateProduct};
pub use review::{Review, ReviewWithAuthor};
pub use user::{User, UserResponse};
pub use wishlist::WishlistEntry;
