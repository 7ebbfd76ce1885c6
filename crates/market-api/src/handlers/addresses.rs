//! Address book handlers (authenticated user)

use axum::{
    extract::{Path, State},
    Json,
};
use market_service::{
    AddressData, AddressPayload, AddressService, AddressesData, ApiResponse, MessageResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the caller's addresses
///
/// GET /api/user/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<AddressesData>>> {
    let service = AddressService::new(state.service_context());
    let addresses = service.list(auth.user_id).await?;
    Ok(Json(ApiResponse::new(AddressesData { addresses })))
}

/// Create an address
///
/// POST /api/user/addresses
pub async fn create_address(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<AddressPayload>,
) -> ApiResult<Created<Json<ApiResponse<AddressData>>>> {
    let service = AddressService::new(state.service_context());
    let address = service.create(auth.user_id, payload).await?;
    Ok(Created(Json(ApiResponse::with_message(
        "Address created successfully",
        AddressData { address },
    ))))
}

/// Update an address
///
/// PUT /api/user/addresses/:id
pub async fn update_address(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<AddressPayload>,
) -> ApiResult<Json<ApiResponse<AddressData>>> {
    let service = AddressService::new(state.service_context());
    let address = service.update(auth.user_id, id, payload).await?;
    Ok(Json(ApiResponse::with_message(
        "Address updated successfully",
        AddressData { address },
    )))
}

/// Delete an address
///
/// DELETE /api/user/addresses/:id
pub async fn delete_address(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AddressService::new(state.service_context());
    service.delete(auth.user_id, id).await?;
    Ok(Json(MessageResponse::new("Address deleted successfully")))
}

/// Make an address the default
///
/// PUT /api/user/addresses/:id/default
pub async fn set_default_address(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<AddressData>>> {
    let service = AddressService::new(state.service_context());
    let address = service.set_default(auth.user_id, id).await?;
    Ok(Json(ApiResponse::with_message(
        "Default address updated",
        AddressData { address },
    )))
}
