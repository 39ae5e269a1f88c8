//! Wishlist model and related functionality

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Product;

/// A wishlisted product together with when it was added
#[derive(Debug, Clone, Serialize)]
pub struct WishlistEntry {
    #[serde(flatten)]
    pub product: Product,
    pub added_at: DateTime<Utc>,
}
