//! Order entity and lifecycle
//!
//! An order is one checkout transaction: a header (subtotal, shipping cost,
//! address snapshot, status) plus one item line per product, with the unit
//! price captured at purchase time.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle states.
///
/// `Delivered` and `Cancelled` are terminal: once reached, the order cannot
/// move to a *different* state. Re-applying the current state is accepted as
/// a no-op so repeated updates stay idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivering,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every valid status, in lifecycle order
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivering,
        Self::Delivered,
        Self::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivering => "delivering",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal states have no outgoing transitions
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether an order in this state may move to `next`.
    ///
    /// Same-state updates are always allowed (no-op). Any other transition is
    /// allowed as long as the current state is not terminal.
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next || !self.is_terminal()
    }

    /// Human-readable list of the valid status values, for error messages
    pub fn whitelist() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivering" => Ok(Self::Delivering),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

/// Order header. `total_amount` is the item subtotal; the grand total is
/// `total_amount + shipping_cost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: Decimal,
    pub shipping_cost: Decimal,
    pub shipping_address: String,
    pub address_id: Option<i64>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Subtotal plus shipping
    pub fn grand_total(&self) -> Decimal {
        (self.total_amount + self.shipping_cost).round_dp(2)
    }
}

/// One product line within an order. `price` is the unit price captured at
/// purchase time and is never re-read from the live product row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl OrderItem {
    /// Captured unit price times quantity
    pub fn line_total(&self) -> Decimal {
        (self.price * Decimal::from(self.quantity)).round_dp(2)
    }
}

/// Order item enriched with the catalog fields read paths display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemDetail {
    pub item: OrderItem,
    pub product_name: String,
    pub product_image: Option<String>,
}

/// Order header joined with its customer, for admin listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderWithCustomer {
    pub order: Order,
    pub username: String,
    pub email: String,
}

/// Values for the transactional order write: one header plus its item lines,
/// persisted all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: i64,
    pub total_amount: Decimal,
    pub shipping_cost: Decimal,
    pub shipping_address: String,
    pub address_id: Option<i64>,
    pub status: OrderStatus,
    pub items: Vec<NewOrderItem>,
}

/// One line of a [`NewOrder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub price: Decimal,
}
