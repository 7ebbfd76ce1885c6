//! Database models - SQLx `FromRow` structs mirroring the tables

mod address;
mod booking;
mod contact;
mod order;
mod product;
mod user;

pub use address::AddressModel;
pub use booking::BookingModel;
pub use contact::ContactModel;
pub use order::{OrderItemDetailModel, OrderItemModel, OrderModel, OrderWithCustomerModel};
pub use product::ProductModel;
pub use user::UserModel;
