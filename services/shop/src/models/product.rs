//! Product model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product entity
///
/// `sizes` and `tags` are native Postgres text arrays; no serialization
/// happens above the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub original_price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
    pub rating: f64,
    pub is_on_sale: bool,
    pub sizes: Vec<String>,
    pub discount: f64,
    pub deal_type: Option<String>,
    pub deal_ends: Option<String>,
    pub stock_left: i32,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New product creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub original_price: Option<f64>,
    pub category: String,
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

/// Product update payload
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub is_on_sale: Option<bool>,
    pub sizes: Option<Vec<String>>,
    pub discount: Option<f64>,
    pub deal_type: Option<String>,
    pub deal_ends: Option<String>,
    pub stock_left: Option<i32>,
    pub tags: Option<Vec<String>>,
}
