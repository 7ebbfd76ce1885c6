//! Booking handlers

use axum::{
    extract::{Path, State},
    Json,
};
use market_service::{
    ApiResponse, BookingData, BookingRequest, BookingService, BookingsData, MessageResponse,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit a booking request (public)
///
/// POST /api/booking
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BookingRequest>,
) -> ApiResult<Created<Json<ApiResponse<BookingData>>>> {
    let service = BookingService::new(state.service_context());
    let booking = service.create(request).await?;
    Ok(Created(Json(ApiResponse::with_message(
        "Booking received successfully",
        BookingData { booking },
    ))))
}

/// List bookings (admin)
///
/// GET /api/admin/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<BookingsData>>> {
    let service = BookingService::new(state.service_context());
    let bookings = service.list().await?;
    Ok(Json(ApiResponse::new(BookingsData { bookings })))
}

/// Delete a booking (admin)
///
/// DELETE /api/admin/bookings/:id
pub async fn delete_booking(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = BookingService::new(state.service_context());
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Booking deleted successfully")))
}
