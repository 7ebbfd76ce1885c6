//! Order service
//!
//! Read paths (user and admin) and the status lifecycle. A status update
//! validates the whitelist, forbids leaving a terminal state, and dispatches
//! the delivery confirmation exactly once per order.

use market_core::entities::OrderStatus;
use market_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{AdminOrderResponse, OrderDetailResponse, UpdateOrderStatusRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Order service
pub struct OrderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OrderService<'a> {
    /// Create a new OrderService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every order with customer and items (admin)
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<AdminOrderResponse>> {
        let orders = self.ctx.order_repo().list().await?;

        let mut responses = Vec::with_capacity(orders.len());
        for with_customer in &orders {
            let items = self.ctx.order_repo().items(with_customer.order.id).await?;
            responses.push(AdminOrderResponse::compose(with_customer, &items));
        }

        Ok(responses)
    }

    /// Get one order with customer and items (admin)
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<AdminOrderResponse> {
        let with_customer = self
            .ctx
            .order_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", id.to_string()))?;

        let items = self.ctx.order_repo().items(id).await?;
        Ok(AdminOrderResponse::compose(&with_customer, &items))
    }

    /// List the caller's own orders with items
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: i64) -> ServiceResult<Vec<OrderDetailResponse>> {
        let orders = self.ctx.order_repo().find_by_user(user_id).await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in &orders {
            let items = self.ctx.order_repo().items(order.id).await?;
            responses.push(OrderDetailResponse::compose(order, &items));
        }

        Ok(responses)
    }

    /// Apply a status transition (admin).
    ///
    /// The target must be in the status whitelist, and terminal orders only
    /// accept their current status (a no-op). The delivery confirmation is
    /// sent only on an actual arrival at `delivered`, so repeating the call
    /// cannot re-notify.
    #[instrument(skip(self, request), fields(status = %request.status))]
    pub async fn update_status(
        &self,
        id: i64,
        request: UpdateOrderStatusRequest,
    ) -> ServiceResult<AdminOrderResponse> {
        let status: OrderStatus = request
            .status
            .parse()
            .map_err(|_| DomainError::InvalidStatus(request.status.clone()))?;

        let existing = self
            .ctx
            .order_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", id.to_string()))?;

        let previous = existing.order.status;
        if !previous.can_transition_to(status) {
            return Err(DomainError::InvalidStatusTransition {
                from: previous,
                to: status,
            }
            .into());
        }

        let order = self.ctx.order_repo().update_status(id, status).await?;
        let items = self.ctx.order_repo().items(id).await?;

        info!(order_id = id, from = %previous, to = %status, "Order status updated");

        // Notify on the delivering -> delivered edge only; a repeated
        // `delivered` update is a no-op transition and stays silent
        if status == OrderStatus::Delivered && previous != OrderStatus::Delivered {
            match self.ctx.user_repo().find_by_id(order.user_id).await {
                Ok(Some(user)) => {
                    if let Err(e) = self
                        .ctx
                        .mailer()
                        .send_delivery_confirmation(&order, &user, &items)
                        .await
                    {
                        warn!(order_id = id, error = %e, "Delivery confirmation email failed");
                    }
                }
                Ok(None) => warn!(order_id = id, "Delivery email skipped: user row missing"),
                Err(e) => warn!(order_id = id, error = %e, "Delivery email skipped: user lookup failed"),
            }
        }

        Ok(AdminOrderResponse::compose(
            &market_core::entities::OrderWithCustomer {
                order,
                username: existing.username,
                email: existing.email,
            },
            &items,
        ))
    }
}
