//! Booking entity <-> model mapper

use market_core::entities::Booking;

use crate::models::BookingModel;

impl From<BookingModel> for Booking {
    fn from(model: BookingModel) -> Self {
        Booking {
            id: model.id,
            name: model.name,
            phone: model.phone,
            email: model.email,
            order_type: model.order_type,
            appointment_date: model.appointment_date,
            appointment_time: model.appointment_time,
            description: model.description,
            created_at: model.created_at,
        }
    }
}
