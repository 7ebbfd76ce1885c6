//! PostgreSQL implementation of BookingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::entities::{Booking, NewBooking};
use market_core::traits::{BookingRepository, RepoResult};

use crate::models::BookingModel;

use super::error::{booking_not_found, map_db_error};

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(
            r"
            SELECT id, name, phone, email, order_type, appointment_date,
                   appointment_time, description, created_at
            FROM bookings
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Booking::from).collect())
    }

    #[instrument(skip(self, new))]
    async fn create(&self, new: &NewBooking) -> RepoResult<Booking> {
        let result = sqlx::query_as::<_, BookingModel>(
            r"
            INSERT INTO bookings (name, phone, email, order_type, appointment_date,
                                  appointment_time, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, phone, email, order_type, appointment_date,
                      appointment_time, description, created_at
            ",
        )
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(&new.order_type)
        .bind(new.appointment_date)
        .bind(new.appointment_time)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Booking::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(booking_not_found(id));
        }

        Ok(())
    }
}
