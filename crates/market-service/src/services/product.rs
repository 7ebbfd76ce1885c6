//! Product catalog service
//!
//! Public listing plus admin CRUD. Prices are validated positive at the DTO
//! boundary and again by the database CHECK constraint.

use market_core::entities::NewProduct;
use tracing::{info, instrument};

use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Product catalog service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the catalog, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().list().await?;
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    /// Get one product
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ProductResponse> {
        let product = self
            .ctx
            .product_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id.to_string()))?;

        Ok(ProductResponse::from(&product))
    }

    /// Create a product (admin)
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateProductRequest) -> ServiceResult<ProductResponse> {
        let new = NewProduct {
            name: request.name.trim().to_string(),
            price: request.price,
            description: request.description.map(|d| d.trim().to_string()),
            image: request.image.map(|i| i.trim().to_string()),
        };

        let product = self.ctx.product_repo().create(&new).await?;

        info!(product_id = product.id, "Product created");
        Ok(ProductResponse::from(&product))
    }

    /// Update a product (admin). Absent fields keep their current values.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateProductRequest,
    ) -> ServiceResult<ProductResponse> {
        let existing = self
            .ctx
            .product_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id.to_string()))?;

        let changes = NewProduct {
            name: request
                .name
                .map_or(existing.name, |n| n.trim().to_string()),
            price: request.price.unwrap_or(existing.price),
            description: match request.description {
                Some(d) => Some(d.trim().to_string()),
                None => existing.description,
            },
            image: match request.image {
                Some(i) => Some(i.trim().to_string()),
                None => existing.image,
            },
        };

        let product = self.ctx.product_repo().update(id, &changes).await?;

        info!(product_id = id, "Product updated");
        Ok(ProductResponse::from(&product))
    }

    /// Delete a product (admin)
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.product_repo().delete(id).await?;

        info!(product_id = id, "Product deleted");
        Ok(())
    }
}
