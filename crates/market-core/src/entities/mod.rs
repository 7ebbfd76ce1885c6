//! Domain entities - core business objects

mod address;
mod booking;
mod contact;
mod order;
mod product;
mod user;

pub use address::{format_shipping_snapshot, Address, NewAddress, DEFAULT_COUNTRY};
pub use booking::{Booking, NewBooking};
pub use contact::{Contact, NewContact};
pub use order::{
    NewOrder, NewOrderItem, Order, OrderItem, OrderItemDetail, OrderStatus, OrderWithCustomer,
};
pub use product::{NewProduct, Product};
pub use user::{User, UserRole};
