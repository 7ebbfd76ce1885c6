//! Admin user management service

use market_common::auth::hash_password;
use tracing::{info, instrument};

use crate::dto::{UpdatePasswordRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin-facing account management
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List customer accounts (admins excluded)
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list_customers().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get one account by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Reset an account's password
    #[instrument(skip(self, request))]
    pub async fn update_password(
        &self,
        id: i64,
        request: UpdatePasswordRequest,
    ) -> ServiceResult<()> {
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .user_repo()
            .update_password(id, &password_hash)
            .await?;

        info!(user_id = id, "Password updated by admin");
        Ok(())
    }

    /// Flip an account's active flag. Disabled accounts cannot log in.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: i64) -> ServiceResult<UserResponse> {
        let user = self.ctx.user_repo().toggle_active(id).await?;

        info!(user_id = id, is_active = user.is_active, "Account active flag toggled");
        Ok(UserResponse::from(&user))
    }
}
