//! Order entity <-> model mappers

use market_core::entities::{Order, OrderItem, OrderItemDetail, OrderStatus, OrderWithCustomer};

use crate::models::{OrderItemDetailModel, OrderItemModel, OrderModel, OrderWithCustomerModel};

/// Convert a stored status string to the enum. The column carries a CHECK
/// constraint over the same whitelist, so an unexpected value can only mean
/// schema drift; fall back to `pending` rather than refusing to read the row.
pub fn parse_order_status(status: &str) -> OrderStatus {
    status.parse().unwrap_or(OrderStatus::Pending)
}

/// Convert the status enum to its database string
pub fn order_status_to_str(status: OrderStatus) -> &'static str {
    status.as_str()
}

impl From<OrderModel> for Order {
    fn from(model: OrderModel) -> Self {
        Order {
            id: model.id,
            user_id: model.user_id,
            total_amount: model.total_amount,
            shipping_cost: model.shipping_cost,
            shipping_address: model.shipping_address,
            address_id: model.address_id,
            status: parse_order_status(&model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<OrderWithCustomerModel> for OrderWithCustomer {
    fn from(model: OrderWithCustomerModel) -> Self {
        OrderWithCustomer {
            order: Order {
                id: model.id,
                user_id: model.user_id,
                total_amount: model.total_amount,
                shipping_cost: model.shipping_cost,
                shipping_address: model.shipping_address,
                address_id: model.address_id,
                status: parse_order_status(&model.status),
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            username: model.username,
            email: model.email,
        }
    }
}

impl From<OrderItemModel> for OrderItem {
    fn from(model: OrderItemModel) -> Self {
        OrderItem {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            quantity: model.quantity,
            price: model.price,
            created_at: model.created_at,
        }
    }
}

impl From<OrderItemDetailModel> for OrderItemDetail {
    fn from(model: OrderItemDetailModel) -> Self {
        OrderItemDetail {
            item: OrderItem {
                id: model.id,
                order_id: model.order_id,
                product_id: model.product_id,
                quantity: model.quantity,
                price: model.price,
                created_at: model.created_at,
            },
            product_name: model.product_name,
            product_image: model.product_image,
        }
    }
}
