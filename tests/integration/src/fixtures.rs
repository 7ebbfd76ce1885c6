//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Requests
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "secret123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Create product request (admin)
#[derive(Debug, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CreateProductRequest {
    pub fn unique(price: Decimal) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Product {suffix}"),
            price,
            description: Some("A test product".to_string()),
            image: None,
        }
    }
}

/// Address payload for the address book and inline checkout
#[derive(Debug, Clone, Serialize)]
pub struct AddressPayload {
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub is_default: bool,
}

impl AddressPayload {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            full_name: format!("Test Customer {suffix}"),
            street_address: format!("{suffix} Hamra Street"),
            city: "Beirut".to_string(),
            state: None,
            zip_code: None,
            country: None,
            phone: None,
            is_default: false,
        }
    }

    pub fn default_address() -> Self {
        Self {
            is_default: true,
            ..Self::unique()
        }
    }
}

/// Build a checkout body with an inline address
pub fn checkout_body_inline(
    items: &[(i64, i32, Decimal)],
    address: &AddressPayload,
    save_address: bool,
) -> serde_json::Value {
    json!({
        "items": items
            .iter()
            .map(|(id, quantity, price)| json!({"id": id, "quantity": quantity, "price": price}))
            .collect::<Vec<_>>(),
        "address": address,
        "save_address": save_address,
    })
}

/// Build a checkout body referencing a saved address
pub fn checkout_body_with_address_id(
    items: &[(i64, i32, Decimal)],
    address_id: i64,
) -> serde_json::Value {
    json!({
        "items": items
            .iter()
            .map(|(id, quantity, price)| json!({"id": id, "quantity": quantity, "price": price}))
            .collect::<Vec<_>>(),
        "address_id": address_id,
    })
}

// ============================================================================
// Responses
// ============================================================================

/// User account as returned by auth endpoints
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

/// `data` payload of register/login/profile
#[derive(Debug, Deserialize)]
pub struct AuthData {
    pub user: UserResponse,
}

/// Product as returned by the API
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ProductData {
    pub product: ProductResponse,
}

/// Address as returned by the API
#[derive(Debug, Deserialize)]
pub struct AddressResponse {
    pub id: i64,
    pub user_id: i64,
    pub country: String,
    pub is_default: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddressData {
    pub address: AddressResponse,
}

#[derive(Debug, Deserialize)]
pub struct AddressesData {
    pub addresses: Vec<AddressResponse>,
}

/// One order line as returned by the API
#[derive(Debug, Deserialize)]
pub struct OrderItemResponse {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
}

/// Order with items and totals as returned by the API
#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
    pub shipping_address: String,
    pub shipping_cost: Decimal,
    pub subtotal: Decimal,
    pub total: Decimal,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Deserialize)]
pub struct OrderData {
    pub order: OrderResponse,
}

#[derive(Debug, Deserialize)]
pub struct OrdersData {
    pub orders: Vec<OrderResponse>,
}
