//! Authentication handlers
//!
//! Registration, login, logout, and the current-user profile. The access
//! token is set in an HttpOnly cookie on register/login and cleared on
//! logout.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use market_common::AppConfig;
use market_service::{
    ApiResponse, AuthData, AuthService, LoginRequest, MessageResponse, RegisterRequest,
};

use crate::extractors::{AuthUser, ValidatedJson, AUTH_COOKIE};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Build the HttpOnly session cookie carrying the access token
fn auth_cookie(token: String, config: &AppConfig) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.app.env.is_production())
        .build()
}

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(CookieJar, Created<Json<ApiResponse<AuthData>>>)> {
    let service = AuthService::new(state.service_context());
    let (token, user) = service.register(request).await?;

    let jar = jar.add(auth_cookie(token, state.config()));
    Ok((
        jar,
        Created(Json(ApiResponse::with_message(
            "User registered successfully",
            AuthData { user },
        ))),
    ))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<AuthData>>)> {
    let service = AuthService::new(state.service_context());
    let (token, user) = service.login(request).await?;

    let jar = jar.add(auth_cookie(token, state.config()));
    Ok((
        jar,
        Json(ApiResponse::with_message("Login successful", AuthData { user })),
    ))
}

/// Logout by clearing the token cookie
///
/// POST /api/auth/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::from(AUTH_COOKIE));
    (jar, Json(MessageResponse::new("Logout successful")))
}

/// Get the current user's profile
///
/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<AuthData>>> {
    let service = AuthService::new(state.service_context());
    let user = service.profile(auth.user_id).await?;
    Ok(Json(ApiResponse::new(AuthData { user })))
}
