//! Admin user management handlers

use axum::{
    extract::{Path, State},
    Json,
};
use market_service::{
    ApiResponse, MessageResponse, UpdatePasswordRequest, UserData, UserService, UsersData,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List customer accounts (admin)
///
/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<UsersData>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_customers().await?;
    Ok(Json(ApiResponse::new(UsersData { users })))
}

/// Get one account (admin)
///
/// GET /api/admin/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<UserData>>> {
    let service = UserService::new(state.service_context());
    let user = service.get(id).await?;
    Ok(Json(ApiResponse::new(UserData { user })))
}

/// Reset an account's password (admin)
///
/// PUT /api/admin/users/:id/password
pub async fn update_user_password(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    service.update_password(id, request).await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}

/// Enable or disable an account (admin)
///
/// PUT /api/admin/users/:id/toggle-active
pub async fn toggle_user_active(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<UserData>>> {
    let service = UserService::new(state.service_context());
    let user = service.toggle_active(id).await?;
    let message = if user.is_active {
        "User account enabled"
    } else {
        "User account disabled"
    };
    Ok(Json(ApiResponse::with_message(message, UserData { user })))
}
