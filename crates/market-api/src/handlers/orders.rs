//! Order handlers
//!
//! Users read their own orders; the admin surface lists everything and
//! drives the status lifecycle.

use axum::{
    extract::{Path, State},
    Json,
};
use market_service::{
    AdminOrderResponse, ApiResponse, OrderData, OrderDetailResponse, OrderService, OrdersData,
    UpdateOrderStatusRequest,
};

use crate::extractors::{AdminUser, AuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// List the caller's orders
///
/// GET /api/user/orders
pub async fn get_user_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<OrdersData<OrderDetailResponse>>>> {
    let service = OrderService::new(state.service_context());
    let orders = service.list_for_user(auth.user_id).await?;
    Ok(Json(ApiResponse::new(OrdersData { orders })))
}

/// List every order (admin)
///
/// GET /api/admin/orders
pub async fn list_orders(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<OrdersData<AdminOrderResponse>>>> {
    let service = OrderService::new(state.service_context());
    let orders = service.list_all().await?;
    Ok(Json(ApiResponse::new(OrdersData { orders })))
}

/// Get one order (admin)
///
/// GET /api/admin/orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<OrderData<AdminOrderResponse>>>> {
    let service = OrderService::new(state.service_context());
    let order = service.get(id).await?;
    Ok(Json(ApiResponse::new(OrderData { order })))
}

/// Update an order's status (admin)
///
/// PUT /api/admin/orders/:id/status
pub async fn update_order_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> ApiResult<Json<ApiResponse<OrderData<AdminOrderResponse>>>> {
    let service = OrderService::new(state.service_context());
    let order = service.update_status(id, request).await?;
    Ok(Json(ApiResponse::with_message(
        "Order status updated successfully",
        OrderData { order },
    )))
}
