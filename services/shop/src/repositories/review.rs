//! Review repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};
use tracing::info;

use crate::models::ReviewWithAuthor;

/// Review repository
#[derive(Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a product review and refresh the product's average rating
    pub async fn create(
        &self,
        product_id: &str,
        user_id: i64,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<i64> {
        let row = sqlx::query(
            r#"
            INSERT INTO reviews (product_id, user_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(product_id)
        .bind(user_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(&self.pool)
        .await?;

        let review_id: i64 = row.get("id");

        self.refresh_product_rating(product_id).await?;

        info!("Created review {} for product {}", review_id, product_id);
        Ok(review_id)
    }

    /// Get all reviews for a product, newest first, with author names
    pub async fn get_by_product(&self, product_id: &str) -> Result<Vec<ReviewWithAuthor>> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.product_id, r.user_id, r.rating, r.comment, r.created_at,
                   u.name AS user_name
            FROM reviews r
            JOIN users u ON r.user_id = u.id
            WHERE r.product_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        let reviews = rows
            .into_iter()
            .map(|row| ReviewWithAuthor {
                id: row.get("id"),
                product_id: row.get("product_id"),
                user_id: row.get("user_id"),
                rating: row.get("rating"),
                comment: row.get("comment"),
                created_at: row.get("created_at"),
                user_name: row.get("user_name"),
            })
            .collect();

        Ok(reviews)
    }

    /// Recompute the product's average rating from its reviews
    async fn refresh_product_rating(&self, product_id: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE products
            SET rating = sub.avg_rating, updated_at = now()
            FROM (
                SELECT AVG(rating)::DOUBLE PRECISION AS avg_rating
                FROM reviews
                WHERE product_id = $1
            ) AS sub
            WHERE products.id = $1 AND sub.avg_rating IS NOT NULL
            "#,
        )
        .bind(product_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
