//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer provides
//! the implementation. Backends are selected once at process startup and
//! injected, never branched on at call sites.

use async_trait::async_trait;

use crate::entities::{
    Address, Booking, Contact, NewAddress, NewBooking, NewContact, NewOrder, NewProduct, Order,
    OrderItemDetail, OrderStatus, OrderWithCustomer, Product, User,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// List customer accounts (admin accounts excluded)
    async fn list_customers(&self) -> RepoResult<Vec<User>>;

    /// Create a new user account with the `user` role
    async fn create(&self, username: &str, email: &str, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;

    /// Flip the active flag, returning the updated account
    async fn toggle_active(&self, id: i64) -> RepoResult<User>;
}

// ============================================================================
// Product Repository
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products, newest first
    async fn list(&self) -> RepoResult<Vec<Product>>;

    /// Find product by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>>;

    /// Create a new product
    async fn create(&self, new: &NewProduct) -> RepoResult<Product>;

    /// Replace a product's fields
    async fn update(&self, id: i64, changes: &NewProduct) -> RepoResult<Product>;

    /// Delete a product
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Address Repository
// ============================================================================

#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Find address by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Address>>;

    /// List a user's addresses, default first
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Address>>;

    /// Create an address. When `new.is_default` is set, the user's previous
    /// default is cleared in the same transaction.
    async fn create(&self, new: &NewAddress) -> RepoResult<Address>;

    /// Replace an address's fields, with the same default-swap guarantee
    async fn update(&self, id: i64, changes: &NewAddress) -> RepoResult<Address>;

    /// Delete an address
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Make `address_id` the user's only default address, atomically
    async fn set_default(&self, user_id: i64, address_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Order Repository
// ============================================================================

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist one order header and all of its items in a single transaction.
    /// All-or-nothing: no partial order is ever visible to other readers.
    async fn create(&self, new: &NewOrder) -> RepoResult<Order>;

    /// Find order by ID, joined with its customer
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<OrderWithCustomer>>;

    /// List all orders with their customers, newest first (admin view)
    async fn list(&self) -> RepoResult<Vec<OrderWithCustomer>>;

    /// List one user's orders, newest first
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Order>>;

    /// Load an order's items with catalog display fields
    async fn items(&self, order_id: i64) -> RepoResult<Vec<OrderItemDetail>>;

    /// Persist a new status and bump `updated_at`
    async fn update_status(&self, id: i64, status: OrderStatus) -> RepoResult<Order>;
}

// ============================================================================
// Contact Repository
// ============================================================================

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// List all contact submissions, newest first
    async fn list(&self) -> RepoResult<Vec<Contact>>;

    /// Create a contact submission
    async fn create(&self, new: &NewContact) -> RepoResult<Contact>;

    /// Delete a contact submission
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Booking Repository
// ============================================================================

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// List all bookings, newest first
    async fn list(&self) -> RepoResult<Vec<Booking>>;

    /// Create a booking
    async fn create(&self, new: &NewBooking) -> RepoResult<Booking>;

    /// Delete a booking
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
