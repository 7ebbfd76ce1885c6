//! Booking service

use market_core::entities::NewBooking;
use tracing::{info, instrument};

use crate::dto::{BookingRequest, BookingResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Appointment booking service
pub struct BookingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookingService<'a> {
    /// Create a new BookingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a booking request (public)
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: BookingRequest) -> ServiceResult<BookingResponse> {
        let booking = self
            .ctx
            .booking_repo()
            .create(&NewBooking {
                name: request.name,
                phone: request.phone,
                email: request.email,
                order_type: request.order_type,
                appointment_date: request.appointment_date,
                appointment_time: request.appointment_time,
                description: request.description,
            })
            .await?;

        info!(booking_id = booking.id, "Booking received");
        Ok(BookingResponse::from(&booking))
    }

    /// List all bookings (admin)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<BookingResponse>> {
        let bookings = self.ctx.booking_repo().list().await?;
        Ok(bookings.iter().map(BookingResponse::from).collect())
    }

    /// Delete a booking (admin)
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.booking_repo().delete(id).await?;

        info!(booking_id = id, "Booking deleted");
        Ok(())
    }
}
