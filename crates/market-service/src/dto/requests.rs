//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where input rules exist,
//! `Validate` for input validation.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Price inputs must be strictly positive
fn validate_positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("price_positive"))
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 50, message = "Username must be 2-50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Admin User Requests
// ============================================================================

/// Admin password reset for an account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

// ============================================================================
// Product Requests
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Product name is required"))]
    pub name: String,

    #[validate(custom(function = validate_positive_price, message = "Price must be greater than 0"))]
    pub price: Decimal,

    pub description: Option<String>,

    pub image: Option<String>,
}

/// Update product request; absent fields keep their current values
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Product name is required"))]
    pub name: Option<String>,

    #[validate(custom(function = validate_positive_price, message = "Price must be greater than 0"))]
    pub price: Option<Decimal>,

    pub description: Option<String>,

    pub image: Option<String>,
}

// ============================================================================
// Address Requests
// ============================================================================

/// Address fields as submitted by a user, either to save to the address book
/// or inline at checkout. Country defaults when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddressPayload {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 255, message = "Street address is required"))]
    pub street_address: String,

    #[validate(length(min = 1, max = 100, message = "City is required"))]
    pub city: String,

    pub state: Option<String>,

    pub zip_code: Option<String>,

    pub country: Option<String>,

    pub phone: Option<String>,

    #[serde(default)]
    pub is_default: bool,
}

// ============================================================================
// Checkout Requests
// ============================================================================

/// One cart line at checkout: the product, how many, and the unit price the
/// cart was quoted
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CartItemRequest {
    pub id: i64,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    pub price: Decimal,
}

/// Checkout request: cart lines plus either a saved address reference or an
/// inline address (optionally persisted)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(nested)]
    pub items: Vec<CartItemRequest>,

    #[validate(nested)]
    pub address: Option<AddressPayload>,

    pub address_id: Option<i64>,

    #[serde(default)]
    pub save_address: bool,

    pub shipping_cost: Option<Decimal>,
}

// ============================================================================
// Order Requests
// ============================================================================

/// Admin order status update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

// ============================================================================
// Contact / Booking Requests
// ============================================================================

/// Contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Appointment booking submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Phone is required"))]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Order type is required"))]
    pub order_type: String,

    pub appointment_date: NaiveDate,

    pub appointment_time: NaiveTime,

    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "amira".to_string(),
            email: "amira@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_password = RegisterRequest {
            password: "abc".to_string(),
            ..valid.clone()
        };
        assert!(short_password.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_product_price_must_be_positive() {
        let free = CreateProductRequest {
            name: "Shea butter".to_string(),
            price: Decimal::ZERO,
            description: None,
            image: None,
        };
        assert!(free.validate().is_err());

        let priced = CreateProductRequest {
            price: Decimal::new(999, 2),
            ..free
        };
        assert!(priced.validate().is_ok());
    }

    #[test]
    fn test_cart_item_quantity_minimum() {
        let item = CartItemRequest {
            id: 1,
            quantity: 0,
            price: Decimal::new(1000, 2),
        };
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_checkout_validates_nested_items() {
        let request = CheckoutRequest {
            items: vec![CartItemRequest {
                id: 1,
                quantity: 0,
                price: Decimal::new(1000, 2),
            }],
            address: None,
            address_id: Some(1),
            save_address: false,
            shipping_cost: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_address_payload_requires_core_fields() {
        let payload = AddressPayload {
            full_name: String::new(),
            street_address: "5 Bliss St".to_string(),
            city: "Beirut".to_string(),
            state: None,
            zip_code: None,
            country: None,
            phone: None,
            is_default: false,
        };
        assert!(payload.validate().is_err());
    }
}
