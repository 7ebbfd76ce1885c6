//! Contact database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for contacts table
#[derive(Debug, Clone, FromRow)]
pub struct ContactModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
