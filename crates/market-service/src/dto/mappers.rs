//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use market_core::entities::{
    Address, Booking, Contact, Order, OrderItemDetail, OrderWithCustomer, Product, User,
};

use super::responses::{
    AddressResponse, AdminOrderResponse, BookingResponse, ContactResponse, OrderDetailResponse,
    OrderItemResponse, OrderResponse, ProductResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Product Mappers
// ============================================================================

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            image: product.image.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}

// ============================================================================
// Address Mappers
// ============================================================================

impl From<&Address> for AddressResponse {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id,
            user_id: address.user_id,
            full_name: address.full_name.clone(),
            street_address: address.street_address.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            country: address.country.clone(),
            phone: address.phone.clone(),
            is_default: address.is_default,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self::from(&address)
    }
}

// ============================================================================
// Order Mappers
// ============================================================================

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            total_amount: order.total_amount,
            shipping_cost: order.shipping_cost,
            shipping_address: order.shipping_address.clone(),
            address_id: order.address_id,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl From<&OrderItemDetail> for OrderItemResponse {
    fn from(detail: &OrderItemDetail) -> Self {
        Self {
            id: detail.item.id,
            product_id: detail.item.product_id,
            product_name: detail.product_name.clone(),
            product_image: detail.product_image.clone(),
            quantity: detail.item.quantity,
            price: detail.item.price,
        }
    }
}

impl OrderDetailResponse {
    /// Compose an order and its item lines into the enriched response.
    /// `subtotal` is the stored header amount; `total` adds shipping.
    pub fn compose(order: &Order, items: &[OrderItemDetail]) -> Self {
        Self {
            order: OrderResponse::from(order),
            items: items.iter().map(OrderItemResponse::from).collect(),
            subtotal: order.total_amount,
            total: order.grand_total(),
        }
    }
}

impl AdminOrderResponse {
    /// Compose an order, its customer, and its item lines
    pub fn compose(with_customer: &OrderWithCustomer, items: &[OrderItemDetail]) -> Self {
        let order = &with_customer.order;
        Self {
            order: OrderResponse::from(order),
            username: with_customer.username.clone(),
            email: with_customer.email.clone(),
            items: items.iter().map(OrderItemResponse::from).collect(),
            subtotal: order.total_amount,
            total: order.grand_total(),
        }
    }
}

// ============================================================================
// Contact / Booking Mappers
// ============================================================================

impl From<&Contact> for ContactResponse {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            message: contact.message.clone(),
            created_at: contact.created_at,
        }
    }
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self::from(&contact)
    }
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            name: booking.name.clone(),
            phone: booking.phone.clone(),
            email: booking.email.clone(),
            order_type: booking.order_type.clone(),
            appointment_date: booking.appointment_date,
            appointment_time: booking.appointment_time,
            description: booking.description.clone(),
            created_at: booking.created_at,
        }
    }
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self::from(&booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use market_core::entities::{OrderItem, OrderStatus};
    use rust_decimal::Decimal;

    fn sample_order() -> Order {
        let now = Utc::now();
        Order {
            id: 42,
            user_id: 7,
            total_amount: Decimal::new(2550, 2),
            shipping_cost: Decimal::new(500, 2),
            shipping_address: "5 Bliss St, Beirut, Lebanon".to_string(),
            address_id: Some(3),
            status: OrderStatus::Delivering,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_items() -> Vec<OrderItemDetail> {
        vec![OrderItemDetail {
            item: OrderItem {
                id: 1,
                order_id: 42,
                product_id: 9,
                quantity: 2,
                price: Decimal::new(1000, 2),
                created_at: Utc::now(),
            },
            product_name: "Shea butter".to_string(),
            product_image: None,
        }]
    }

    #[test]
    fn test_order_detail_totals() {
        let response = OrderDetailResponse::compose(&sample_order(), &sample_items());
        assert_eq!(response.subtotal, Decimal::new(2550, 2));
        assert_eq!(response.total, Decimal::new(3050, 2));
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].product_name, "Shea butter");
    }

    #[test]
    fn test_order_detail_serializes_flattened() {
        let response = OrderDetailResponse::compose(&sample_order(), &sample_items());
        let body = serde_json::to_value(&response).unwrap();
        // Header fields sit at the top level next to the derived totals
        assert_eq!(body["id"], 42);
        assert_eq!(body["status"], "delivering");
        assert_eq!(body["subtotal"], "25.50");
        assert_eq!(body["total"], "30.50");
    }
}
