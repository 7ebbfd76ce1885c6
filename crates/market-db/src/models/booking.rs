//! Booking database model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for bookings table
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub order_type: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
