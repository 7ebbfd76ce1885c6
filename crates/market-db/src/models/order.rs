//! Order database models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for the orders table
#[derive(Debug, Clone, FromRow)]
pub struct OrderModel {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: Decimal,
    pub shipping_cost: Decimal,
    pub shipping_address: String,
    pub address_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order row joined with its customer (admin listings)
#[derive(Debug, Clone, FromRow)]
pub struct OrderWithCustomerModel {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: Decimal,
    pub shipping_cost: Decimal,
    pub shipping_address: String,
    pub address_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub username: String,
    pub email: String,
}

/// Database model for the order_items table
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemModel {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Order item joined with its product's display fields
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemDetailModel {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub product_name: String,
    pub product_image: Option<String>,
}
