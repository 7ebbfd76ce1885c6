//! PostgreSQL implementation of OrderRepository
//!
//! `create` is the transactional order writer: the header and every item
//! line commit together or not at all.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::entities::{
    NewOrder, Order, OrderItemDetail, OrderStatus, OrderWithCustomer,
};
use market_core::error::DomainError;
use market_core::traits::{OrderRepository, RepoResult};

use crate::mappers::order_status_to_str;
use crate::models::{OrderItemDetailModel, OrderModel, OrderWithCustomerModel};

use super::error::{map_db_error, order_not_found};

/// PostgreSQL implementation of OrderRepository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new PgOrderRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[instrument(skip(self, new), fields(user_id = new.user_id, items = new.items.len()))]
    async fn create(&self, new: &NewOrder) -> RepoResult<Order> {
        // Header first to obtain the generated id, then one insert per line.
        // Any failure rolls the whole unit back; no partial order is ever
        // visible to other readers.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::OrderCreation(e.to_string()))?;

        let header = sqlx::query_as::<_, OrderModel>(
            r"
            INSERT INTO orders (user_id, total_amount, shipping_cost, shipping_address,
                                address_id, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, total_amount, shipping_cost, shipping_address,
                      address_id, status, created_at, updated_at
            ",
        )
        .bind(new.user_id)
        .bind(new.total_amount)
        .bind(new.shipping_cost)
        .bind(&new.shipping_address)
        .bind(new.address_id)
        .bind(order_status_to_str(new.status))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::OrderCreation(e.to_string()))?;

        for item in &new.items {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, quantity, price)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(header.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::OrderCreation(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::OrderCreation(e.to_string()))?;

        Ok(Order::from(header))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<OrderWithCustomer>> {
        let result = sqlx::query_as::<_, OrderWithCustomerModel>(
            r"
            SELECT o.id, o.user_id, o.total_amount, o.shipping_cost, o.shipping_address,
                   o.address_id, o.status, o.created_at, o.updated_at,
                   u.username, u.email
            FROM orders o
            JOIN users u ON o.user_id = u.id
            WHERE o.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(OrderWithCustomer::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<OrderWithCustomer>> {
        let result = sqlx::query_as::<_, OrderWithCustomerModel>(
            r"
            SELECT o.id, o.user_id, o.total_amount, o.shipping_cost, o.shipping_address,
                   o.address_id, o.status, o.created_at, o.updated_at,
                   u.username, u.email
            FROM orders o
            JOIN users u ON o.user_id = u.id
            ORDER BY o.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(OrderWithCustomer::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Order>> {
        let result = sqlx::query_as::<_, OrderModel>(
            r"
            SELECT id, user_id, total_amount, shipping_cost, shipping_address,
                   address_id, status, created_at, updated_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Order::from).collect())
    }

    #[instrument(skip(self))]
    async fn items(&self, order_id: i64) -> RepoResult<Vec<OrderItemDetail>> {
        let result = sqlx::query_as::<_, OrderItemDetailModel>(
            r"
            SELECT oi.id, oi.order_id, oi.product_id, oi.quantity, oi.price, oi.created_at,
                   p.name AS product_name, p.image AS product_image
            FROM order_items oi
            JOIN products p ON oi.product_id = p.id
            WHERE oi.order_id = $1
            ORDER BY oi.id
            ",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(OrderItemDetail::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: OrderStatus) -> RepoResult<Order> {
        let result = sqlx::query_as::<_, OrderModel>(
            r"
            UPDATE orders
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, total_amount, shipping_cost, shipping_address,
                      address_id, status, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(order_status_to_str(status))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Order::from).ok_or_else(|| order_not_found(id))
    }
}
