//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::entities::{NewProduct, Product};
use market_core::traits::{ProductRepository, RepoResult};

use crate::models::ProductModel;

use super::error::{map_db_error, product_not_found};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new PgProductRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Product>> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, price, description, image, created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, price, description, image, created_at, updated_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Product::from))
    }

    #[instrument(skip(self, new))]
    async fn create(&self, new: &NewProduct) -> RepoResult<Product> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            INSERT INTO products (name, price, description, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, description, image, created_at, updated_at
            ",
        )
        .bind(&new.name)
        .bind(new.price)
        .bind(&new.description)
        .bind(&new.image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Product::from(result))
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, changes: &NewProduct) -> RepoResult<Product> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            UPDATE products
            SET name = $2, price = $3, description = $4, image = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, price, description, image, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(changes.price)
        .bind(&changes.description)
        .bind(&changes.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Product::from).ok_or_else(|| product_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(id));
        }

        Ok(())
    }
}
