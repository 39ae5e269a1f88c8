//! Order model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order lifecycle status, backed by the `order_status` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

/// Order header with its fully hydrated item collection
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub shipping_address: Option<String>,
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItemDetail>,
}

/// Order item enriched at read time with the product's display fields
///
/// `name` and `image` are optional: the join is a LEFT JOIN so an item whose
/// product has disappeared still comes back.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItemDetail {
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
    pub size: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Item payload accepted at order creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
    pub size: Option<String>,
}

/// Header-only order view used for order listings
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderSummary {
    pub id: i64,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_order_status_deserializes_lowercase() {
        let status: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(status, OrderStatus::Shipped);
    }
}
