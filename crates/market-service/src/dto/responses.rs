//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Every endpoint
//! wraps its payload in the `{ success, message?, data }` envelope.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use market_core::entities::{OrderStatus, UserRole};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Success envelope: `{ "success": true, "message"?: ..., "data": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Success envelope with no data payload, for deletions and logout
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth / User Responses
// ============================================================================

/// User account, never including the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for register/login/profile responses
#[derive(Debug, Serialize)]
pub struct AuthData {
    pub user: UserResponse,
}

// ============================================================================
// Data Wrappers
//
// The wire format nests every payload under a named key inside `data`,
// e.g. `{ "success": true, "data": { "products": [...] } }`.
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProductsData {
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Serialize)]
pub struct ProductData {
    pub product: ProductResponse,
}

#[derive(Debug, Serialize)]
pub struct UsersData {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Serialize)]
pub struct UserData {
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct AddressesData {
    pub addresses: Vec<AddressResponse>,
}

#[derive(Debug, Serialize)]
pub struct AddressData {
    pub address: AddressResponse,
}

#[derive(Debug, Serialize)]
pub struct OrdersData<T> {
    pub orders: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct OrderData<T> {
    pub order: T,
}

#[derive(Debug, Serialize)]
pub struct ContactsData {
    pub contacts: Vec<ContactResponse>,
}

#[derive(Debug, Serialize)]
pub struct ContactData {
    pub contact: ContactResponse,
}

#[derive(Debug, Serialize)]
pub struct BookingsData {
    pub bookings: Vec<BookingResponse>,
}

#[derive(Debug, Serialize)]
pub struct BookingData {
    pub booking: BookingResponse,
}

// ============================================================================
// Product Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Address Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AddressResponse {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    pub phone: Option<String>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Order Responses
// ============================================================================

/// Order header fields shared by every order response
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: Decimal,
    pub shipping_cost: Decimal,
    pub shipping_address: String,
    pub address_id: Option<i64>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One order line with its catalog display fields and the captured price
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub product_image: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
}

/// An order enriched with its items and derived totals
#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub items: Vec<OrderItemResponse>,
    pub subtotal: Decimal,
    pub total: Decimal,
}

/// Admin view: order + items + the customer who placed it
#[derive(Debug, Serialize)]
pub struct AdminOrderResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub username: String,
    pub email: String,
    pub items: Vec<OrderItemResponse>,
    pub subtotal: Decimal,
    pub total: Decimal,
}

// ============================================================================
// Contact / Booking Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub order_type: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe body with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::new(serde_json::json!({"n": 1}))).unwrap();
        assert_eq!(body["success"], true);
        assert!(body.get("message").is_none());
        assert_eq!(body["data"]["n"], 1);
    }

    #[test]
    fn test_envelope_with_message() {
        let body = serde_json::to_value(ApiResponse::with_message(
            "Order created successfully",
            serde_json::json!(null),
        ))
        .unwrap();
        assert_eq!(body["message"], "Order created successfully");
    }

    #[test]
    fn test_readiness_status() {
        assert_eq!(ReadinessResponse::ready(true).status, "ready");
        assert_eq!(ReadinessResponse::ready(false).status, "degraded");
    }
}
