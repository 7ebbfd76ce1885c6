//! Service context - dependency container for services
//!
//! Holds the repositories, JWT service, and mailer that services need.
//! Everything is constructed once at startup and injected; there is no
//! process-global state.

use std::sync::Arc;

use market_common::JwtService;
use market_core::traits::{
    AddressRepository, BookingRepository, ContactRepository, OrderRepository, ProductRepository,
    UserRepository,
};
use market_db::PgPool;

use super::mailer::Mailer;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - The outbound mailer
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (kept for readiness checks)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    product_repo: Arc<dyn ProductRepository>,
    address_repo: Arc<dyn AddressRepository>,
    order_repo: Arc<dyn OrderRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    booking_repo: Arc<dyn BookingRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    mailer: Arc<Mailer>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        product_repo: Arc<dyn ProductRepository>,
        address_repo: Arc<dyn AddressRepository>,
        order_repo: Arc<dyn OrderRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        jwt_service: Arc<JwtService>,
        mailer: Arc<Mailer>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            product_repo,
            address_repo,
            order_repo,
            contact_repo,
            booking_repo,
            jwt_service,
            mailer,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the product repository
    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    /// Get the address repository
    pub fn address_repo(&self) -> &dyn AddressRepository {
        self.address_repo.as_ref()
    }

    /// Get the order repository
    pub fn order_repo(&self) -> &dyn OrderRepository {
        self.order_repo.as_ref()
    }

    /// Get the contact repository
    pub fn contact_repo(&self) -> &dyn ContactRepository {
        self.contact_repo.as_ref()
    }

    /// Get the booking repository
    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the outbound mailer
    pub fn mailer(&self) -> &Mailer {
        self.mailer.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("mailer", &"Mailer")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    product_repo: Option<Arc<dyn ProductRepository>>,
    address_repo: Option<Arc<dyn AddressRepository>>,
    order_repo: Option<Arc<dyn OrderRepository>>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    booking_repo: Option<Arc<dyn BookingRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    mailer: Option<Arc<Mailer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            product_repo: None,
            address_repo: None,
            order_repo: None,
            contact_repo: None,
            booking_repo: None,
            jwt_service: None,
            mailer: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn product_repo(mut self, repo: Arc<dyn ProductRepository>) -> Self {
        self.product_repo = Some(repo);
        self
    }

    pub fn address_repo(mut self, repo: Arc<dyn AddressRepository>) -> Self {
        self.address_repo = Some(repo);
        self
    }

    pub fn order_repo(mut self, repo: Arc<dyn OrderRepository>) -> Self {
        self.order_repo = Some(repo);
        self
    }

    pub fn contact_repo(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    pub fn booking_repo(mut self, repo: Arc<dyn BookingRepository>) -> Self {
        self.booking_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn mailer(mut self, mailer: Arc<Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.product_repo
                .ok_or_else(|| ServiceError::validation("product_repo is required"))?,
            self.address_repo
                .ok_or_else(|| ServiceError::validation("address_repo is required"))?,
            self.order_repo
                .ok_or_else(|| ServiceError::validation("order_repo is required"))?,
            self.contact_repo
                .ok_or_else(|| ServiceError::validation("contact_repo is required"))?,
            self.booking_repo
                .ok_or_else(|| ServiceError::validation("booking_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.mailer
                .ok_or_else(|| ServiceError::validation("mailer is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
