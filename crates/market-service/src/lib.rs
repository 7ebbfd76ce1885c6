//! # market-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AddressData, AddressPayload, AddressResponse, AddressesData, AdminOrderResponse, ApiResponse,
    AuthData, BookingData, BookingRequest, BookingResponse, BookingsData, CartItemRequest,
    CheckoutRequest, ContactData, ContactRequest, ContactResponse, ContactsData,
    CreateProductRequest, HealthResponse, LoginRequest, MessageResponse, OrderData,
    OrderDetailResponse, OrderItemResponse, OrderResponse, OrdersData, ProductData,
    ProductResponse, ProductsData, ReadinessResponse, RegisterRequest, UpdateOrderStatusRequest,
    UpdatePasswordRequest, UpdateProductRequest, UserData, UserResponse, UsersData,
};
pub use services::{
    AddressService, AuthService, BookingService, CheckoutService, ContactService, Mailer,
    MailerError, OrderService, ProductService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
