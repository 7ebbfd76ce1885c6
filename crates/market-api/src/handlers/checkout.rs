//! Checkout handler

use axum::{extract::State, Json};
use market_service::{
    ApiResponse, CheckoutRequest, CheckoutService, OrderData, OrderDetailResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create an order from the caller's cart
///
/// POST /api/user/checkout
pub async fn checkout(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CheckoutRequest>,
) -> ApiResult<Created<Json<ApiResponse<OrderData<OrderDetailResponse>>>>> {
    let service = CheckoutService::new(state.service_context());
    let order = service.checkout(auth.user_id, request).await?;
    Ok(Created(Json(ApiResponse::with_message(
        "Order created successfully",
        OrderData { order },
    ))))
}
