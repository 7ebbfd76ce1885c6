//! Error handling utilities for repositories

use market_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::Database(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "product not found" error
pub fn product_not_found(id: i64) -> DomainError {
    DomainError::ProductNotFound(id)
}

/// Create an "address not found" error
pub fn address_not_found(id: i64) -> DomainError {
    DomainError::AddressNotFound(id)
}

/// Create an "order not found" error
pub fn order_not_found(id: i64) -> DomainError {
    DomainError::OrderNotFound(id)
}

/// Create a "contact not found" error
pub fn contact_not_found(id: i64) -> DomainError {
    DomainError::ContactNotFound(id)
}

/// Create a "booking not found" error
pub fn booking_not_found(id: i64) -> DomainError {
    DomainError::BookingNotFound(id)
}
