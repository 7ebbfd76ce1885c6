//! Booking entity - an appointment request

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Appointment booking request. No lifecycle beyond creation and admin
/// deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
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

/// Values for creating a booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub order_type: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub description: Option<String>,
}
