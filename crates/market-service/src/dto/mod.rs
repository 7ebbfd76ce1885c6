//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AddressPayload, BookingRequest, CartItemRequest, CheckoutRequest, ContactRequest,
    CreateProductRequest, LoginRequest, RegisterRequest, UpdateOrderStatusRequest,
    UpdatePasswordRequest, UpdateProductRequest,
};

// Re-export commonly used response types
pub use responses::{
    AddressData, AddressResponse, AddressesData, AdminOrderResponse, ApiResponse, AuthData,
    BookingData, BookingResponse, BookingsData, ContactData, ContactResponse, ContactsData,
    HealthResponse, MessageResponse, OrderData, OrderDetailResponse, OrderItemResponse,
    OrderResponse, OrdersData, ProductData, ProductResponse, ProductsData, ReadinessResponse,
    UserData, UserResponse, UsersData,
};
