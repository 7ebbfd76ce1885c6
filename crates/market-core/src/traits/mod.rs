//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AddressRepository, BookingRepository, ContactRepository, OrderRepository, ProductRepository,
    RepoResult, UserRepository,
};
