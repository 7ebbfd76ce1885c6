//! Address database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for addresses table
#[derive(Debug, Clone, FromRow)]
pub struct AddressModel {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    pub phone: Option<String>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
