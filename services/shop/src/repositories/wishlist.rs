//! Wishlist repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};

use crate::models::{Product, WishlistEntry};

/// Wishlist repository
#[derive(Clone)]
pub struct WishlistRepository {
    pool: PgPool,
}

impl WishlistRepository {
    /// Create a new wishlist repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a product to a user's wishlist
    ///
    /// Returns `Ok(false)` when the product is already wishlisted.
    pub async fn add_item(&self, user_id: i64, product_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO wishlist_items (user_id, product_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a product from a user's wishlist
    ///
    /// Returns whether the product was present.
    pub async fn remove_item(&self, user_id: i64, product_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM wishlist_items
            WHERE user_id = $1 AND product_id = $2
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get all products in a user's wishlist, most recently added first
    pub async fn get_user_wishlist(&self, user_id: i64) -> Result<Vec<WishlistEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.name, p.description, p.price, p.original_price, p.category,
                   p.image, p.rating, p.is_on_sale, p.sizes, p.discount, p.deal_type,
                   p.deal_ends, p.stock_left, p.tags, p.created_at, p.updated_at,
                   w.created_at AS added_at
            FROM wishlist_items w
            JOIN products p ON w.product_id = p.id
            WHERE w.user_id = $1
            ORDER BY w.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let entries = rows
            .into_iter()
            .map(|row| WishlistEntry {
                product: Product {
                    id: row.get("id"),
                    name: row.get("name"),
                    description: row.get("description"),
                    price: row.get("price"),
                    original_price: row.get("original_price"),
                    category: row.get("category"),
                    image: row.get("image"),
                    rating: row.get("rating"),
                    is_on_sale: row.get("is_on_sale"),
                    sizes: row.get("sizes"),
                    discount: row.get("discount"),
                    deal_type: row.get("deal_type"),
                    deal_ends: row.get("deal_ends"),
                    stock_left: row.get("stock_left"),
                    tags: row.get("tags"),
                    created_at: row.get("created_at"),
                    updated_at: row.get("updated_at"),
                },
                added_at: row.get("added_at"),
            })
            .collect();

        Ok(entries)
    }
}
