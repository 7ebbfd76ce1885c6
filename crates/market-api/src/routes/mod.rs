//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    addresses, auth, bookings, checkout, contacts, health, orders, products, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate
/// middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(public_routes())
        .merge(user_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/profile", get(auth::profile))
}

/// Public routes (no authentication)
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/contact", post(contacts::create_contact))
        .route("/booking", post(bookings::create_booking))
}

/// Authenticated user routes
fn user_routes() -> Router<AppState> {
    Router::new()
        // Address book
        .route("/user/addresses", get(addresses::list_addresses))
        .route("/user/addresses", post(addresses::create_address))
        .route("/user/addresses/:id", put(addresses::update_address))
        .route("/user/addresses/:id", delete(addresses::delete_address))
        .route("/user/addresses/:id/default", put(addresses::set_default_address))
        // Checkout
        .route("/user/checkout", post(checkout::checkout))
        // Own orders
        .route("/user/orders", get(orders::get_user_orders))
}

/// Admin routes (role enforced per-handler by the AdminUser extractor)
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Products
        .route("/admin/products", get(products::list_products_admin))
        .route("/admin/products", post(products::create_product))
        .route("/admin/products/:id", get(products::get_product))
        .route("/admin/products/:id", put(products::update_product))
        .route("/admin/products/:id", delete(products::delete_product))
        // Users
        .route("/admin/users", get(users::list_users))
        .route("/admin/users/:id", get(users::get_user))
        .route("/admin/users/:id/password", put(users::update_user_password))
        .route("/admin/users/:id/toggle-active", put(users::toggle_user_active))
        // Orders
        .route("/admin/orders", get(orders::list_orders))
        .route("/admin/orders/:id", get(orders::get_order))
        .route("/admin/orders/:id/status", put(orders::update_order_status))
        // Contacts
        .route("/admin/contacts", get(contacts::list_contacts))
        .route("/admin/contacts/:id", delete(contacts::delete_contact))
        // Bookings
        .route("/admin/bookings", get(bookings::list_bookings))
        .route("/admin/bookings/:id", delete(bookings::delete_booking))
}
