//! Address entity - a saved shipping address owned by a user

use chrono::{DateTime, Utc};

/// Default country applied when an address omits one
pub const DEFAULT_COUNTRY: &str = "Lebanon";

/// Saved shipping address. At most one address per user carries
/// `is_default = true`; the repository enforces the swap atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
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

impl Address {
    /// Render this address as the canonical one-line shipping snapshot
    /// persisted on orders.
    pub fn format(&self) -> String {
        format_shipping_snapshot(
            &self.street_address,
            &self.city,
            self.state.as_deref(),
            self.zip_code.as_deref(),
            &self.country,
        )
    }

    /// Check whether `user_id` owns this address
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Values for creating or replacing an address row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub user_id: i64,
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    pub phone: Option<String>,
    pub is_default: bool,
}

impl NewAddress {
    /// Render the same snapshot an [`Address`] would, without persisting first
    pub fn format(&self) -> String {
        format_shipping_snapshot(
            &self.street_address,
            &self.city,
            self.state.as_deref(),
            self.zip_code.as_deref(),
            &self.country,
        )
    }
}

/// Join the non-empty address parts into `"street, city, state, zip, country"`.
pub fn format_shipping_snapshot(
    street: &str,
    city: &str,
    state: Option<&str>,
    zip_code: Option<&str>,
    country: &str,
) -> String {
    [Some(street), Some(city), state, zip_code, Some(country)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
