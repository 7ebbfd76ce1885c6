//! Authentication extractors
//!
//! The access token travels in an HttpOnly cookie, with an
//! `Authorization: Bearer` header accepted as a fallback for API clients.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::cookie::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use market_core::UserRole;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the HttpOnly cookie carrying the access token
pub const AUTH_COOKIE: &str = "token";

/// Authenticated user extracted from the access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token
    pub user_id: i64,
    /// Role the token was issued with
    pub role: UserRole,
}

impl AuthUser {
    /// Check if the token carries the admin role
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Prefer the cookie; fall back to a bearer header
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingAuth)?;

        let token = match jar.get(AUTH_COOKIE) {
            Some(cookie) => Some(cookie.value().to_string()),
            None => TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .ok()
                .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string()),
        };

        let token = token.ok_or(ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state.jwt_service().validate_token(&token).map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::App(e)
        })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::App(e)
        })?;

        Ok(AuthUser {
            user_id,
            role: claims.role,
        })
    }
}

/// Authenticated admin. Rejects with 403 when the token's role is not admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        if !auth.is_admin() {
            return Err(ApiError::Forbidden);
        }

        Ok(AdminUser(auth))
    }
}
