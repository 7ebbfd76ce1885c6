//! Checkout service
//!
//! The checkout use-case: price the cart, resolve the shipping address to an
//! immutable snapshot, write the order atomically, then attempt the invoice
//! email. The email is best-effort and never affects the response.

use market_core::entities::{NewOrder, NewOrderItem, OrderStatus};
use market_core::pricing::{price_cart, CartLine};
use market_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{CheckoutRequest, OrderDetailResponse};

use super::address::to_new_address;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Checkout service
pub struct CheckoutService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CheckoutService<'a> {
    /// Create a new CheckoutService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an order from a checkout request.
    ///
    /// Orders enter the lifecycle at `delivering` (cash-on-delivery flow: the
    /// shop dispatches immediately and collects payment at the door).
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    pub async fn checkout(
        &self,
        user_id: i64,
        request: CheckoutRequest,
    ) -> ServiceResult<OrderDetailResponse> {
        // Price first: an empty cart fails before any address work
        let lines: Vec<CartLine> = request
            .items
            .iter()
            .map(|item| CartLine::new(item.price, item.quantity))
            .collect();
        let totals = price_cart(&lines, request.shipping_cost)?;

        // Resolve the shipping snapshot. A saved address reference wins over
        // an inline payload when both are present.
        let (shipping_address, address_id) = if let Some(address_id) = request.address_id {
            let address = self.ctx.address_repo().find_by_id(address_id).await?;
            match address {
                Some(address) if address.is_owned_by(user_id) => {
                    (address.format(), Some(address.id))
                }
                // Missing and foreign rows are indistinguishable to the caller
                _ => return Err(ServiceError::validation("Invalid address")),
            }
        } else if let Some(payload) = request.address {
            let new_address = to_new_address(user_id, payload);
            if request.save_address {
                let saved = self.ctx.address_repo().create(&new_address).await?;
                (saved.format(), Some(saved.id))
            } else {
                (new_address.format(), None)
            }
        } else {
            return Err(DomainError::ShippingAddressRequired.into());
        };

        let new_order = NewOrder {
            user_id,
            total_amount: totals.subtotal,
            shipping_cost: totals.shipping,
            shipping_address,
            address_id,
            status: OrderStatus::Delivering,
            items: request
                .items
                .iter()
                .map(|item| NewOrderItem {
                    product_id: item.id,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
        };

        let order = self.ctx.order_repo().create(&new_order).await?;
        let items = self.ctx.order_repo().items(order.id).await?;

        info!(order_id = order.id, user_id, "Order created successfully");

        // Invoice email after commit, never inside the transaction and never
        // fatal to the request
        match self.ctx.user_repo().find_by_id(user_id).await {
            Ok(Some(user)) => {
                if let Err(e) = self.ctx.mailer().send_invoice(&order, &user, &items).await {
                    warn!(order_id = order.id, error = %e, "Invoice email failed");
                }
            }
            Ok(None) => warn!(user_id, "Invoice email skipped: user row missing"),
            Err(e) => warn!(user_id, error = %e, "Invoice email skipped: user lookup failed"),
        }

        Ok(OrderDetailResponse::compose(&order, &items))
    }
}
