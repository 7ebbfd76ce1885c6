//! Model ↔ entity mappers

mod address;
mod booking;
mod contact;
mod order;
mod product;
mod user;

pub use order::{order_status_to_str, parse_order_status};
pub use user::parse_user_role;
