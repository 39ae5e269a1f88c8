//! Product repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{NewProduct, Product, UpdateProduct};

fn map_product(row: &sqlx::postgres::PgRow) -> Product {
    Product {
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
    }
}

const PRODUCT_COLUMNS: &str = "id, name, description, price, original_price, category, image, \
     rating, is_on_sale, sizes, discount, deal_type, deal_ends, stock_left, tags, \
     created_at, updated_at";

/// Product repository
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new product
    ///
    /// A fresh identifier is generated when the payload doesn't carry one.
    pub async fn create(&self, product: &NewProduct) -> Result<String> {
        let id = product
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        info!("Creating product {}: {}", id, product.name);

        sqlx::query(
            r#"
            INSERT INTO products
                (id, name, description, price, original_price, category, image,
                 rating, is_on_sale, sizes, discount, deal_type, deal_ends, stock_left, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7,
                    $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(&id)
        .bind(&product.name)
        .bind(product.description.as_deref())
        .bind(product.price)
        .bind(product.original_price)
        .bind(&product.category)
        .bind(product.image.as_deref())
        .bind(product.rating.unwrap_or(0.0))
        .bind(product.is_on_sale.unwrap_or(false))
        .bind(product.sizes.as_deref().unwrap_or(&[]))
        .bind(product.discount.unwrap_or(0.0))
        .bind(product.deal_type.as_deref())
        .bind(product.deal_ends.as_deref())
        .bind(product.stock_left.unwrap_or(100))
        .bind(product.tags.as_deref().unwrap_or(&[]))
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// Get a product by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        let row = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_product))
    }

    /// Get all products with optional pagination
    pub async fn get_all(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Product>> {
        let rows = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_product).collect())
    }

    /// Update product information
    ///
    /// Only provided fields are changed. Returns whether a matching product
    /// existed.
    pub async fn update(&self, id: &str, update: &UpdateProduct) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                original_price = COALESCE($5, original_price),
                category = COALESCE($6, category),
                image = COALESCE($7, image),
                is_on_sale = COALESCE($8, is_on_sale),
                sizes = COALESCE($9, sizes),
                discount = COALESCE($10, discount),
                deal_type = COALESCE($11, deal_type),
                deal_ends = COALESCE($12, deal_ends),
                stock_left = COALESCE($13, stock_left),
                tags = COALESCE($14, tags),
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(update.name.as_deref())
        .bind(update.description.as_deref())
        .bind(update.price)
        .bind(update.original_price)
        .bind(update.category.as_deref())
        .bind(update.image.as_deref())
        .bind(update.is_on_sale)
        .bind(update.sizes.as_deref())
        .bind(update.discount)
        .bind(update.deal_type.as_deref())
        .bind(update.deal_ends.as_deref())
        .bind(update.stock_left)
        .bind(update.tags.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
