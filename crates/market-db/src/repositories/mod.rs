//! PostgreSQL repository implementations

mod address;
mod booking;
mod contact;
mod error;
mod order;
mod product;
mod user;

pub use address::PgAddressRepository;
pub use booking::PgBookingRepository;
pub use contact::PgContactRepository;
pub use order::PgOrderRepository;
pub use product::PgProductRepository;
pub use user::PgUserRepository;
