//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::OrderStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("Address not found: {0}")]
    AddressNotFound(i64),

    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    #[error("Contact not found: {0}")]
    ContactNotFound(i64),

    #[error("Booking not found: {0}")]
    BookingNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Shipping address is required")]
    ShippingAddressRequired,

    #[error("Invalid status. Must be one of: {}", OrderStatus::whitelist())]
    InvalidStatus(String),

    #[error("Cannot change a {from} order to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User with this email already exists")]
    EmailAlreadyExists,

    #[error("Username already taken")]
    UsernameTaken,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("User account is disabled")]
    AccountDisabled,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    // The cause stays attached for logging; the client only ever sees the
    // generic message
    #[error("Error creating order")]
    OrderCreation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for logs and diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProductNotFound(_) => "UNKNOWN_PRODUCT",
            Self::AddressNotFound(_) => "UNKNOWN_ADDRESS",
            Self::OrderNotFound(_) => "UNKNOWN_ORDER",
            Self::ContactNotFound(_) => "UNKNOWN_CONTACT",
            Self::BookingNotFound(_) => "UNKNOWN_BOOKING",

            // Validation
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::EmptyCart => "EMPTY_CART",
            Self::ShippingAddressRequired => "SHIPPING_ADDRESS_REQUIRED",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameTaken => "USERNAME_TAKEN",

            // Business rules
            Self::AccountDisabled => "ACCOUNT_DISABLED",

            // Infrastructure
            Self::OrderCreation(_) => "ORDER_CREATION_FAILED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ProductNotFound(_)
                | Self::AddressNotFound(_)
                | Self::OrderNotFound(_)
                | Self::ContactNotFound(_)
                | Self::BookingNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::EmptyCart
                | Self::ShippingAddressRequired
                | Self::InvalidStatus(_)
                | Self::InvalidStatusTransition { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::UsernameTaken)
    }
}
