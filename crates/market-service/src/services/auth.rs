//! Authentication service
//!
//! Handles registration, login, and the current-user profile. Issues a
//! single JWT access token; the API layer places it in an HttpOnly cookie.

use market_common::auth::{hash_password, verify_password};
use market_common::AppError;
use market_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user account.
    ///
    /// Every registration gets the `user` role; client input never selects a
    /// role. Returns the signed token and the created account.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<(String, UserResponse)> {
        if self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        if self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(DomainError::UsernameTaken.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .create(&request.username, &request.email, &password_hash)
            .await?;

        info!(user_id = user.id, "User registered successfully");

        let token = self
            .ctx
            .jwt_service()
            .generate_token(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok((token, UserResponse::from(&user)))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<(String, UserResponse)> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !user.is_active() {
            warn!(user_id = user.id, "Login failed: account disabled");
            return Err(ServiceError::App(AppError::AccountDisabled));
        }

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "User logged in successfully");

        let token = self
            .ctx
            .jwt_service()
            .generate_token(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok((token, UserResponse::from(&user)))
    }

    /// Get the current user's profile
    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }
}
