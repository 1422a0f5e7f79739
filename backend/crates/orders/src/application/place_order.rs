//! Place Order Use Case
//!
//! Records an order exactly as submitted. The owner comes from the verified
//! token, never from the request body. Stock levels are not adjusted at
//! intake; stock movements happen downstream in fulfilment.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::order::{Order, OrderLine, OrderStatus};
use crate::domain::repository::OrderRepository;
use crate::domain::validation::{validate_lines, validate_total_amount};
use crate::error::OrderResult;

/// Place order input
pub struct PlaceOrderInput {
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    pub total_amount: f64,
    pub status: Option<OrderStatus>,
}

/// Place order use case
pub struct PlaceOrderUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> PlaceOrderUseCase<O>
where
    O: OrderRepository,
{
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    pub async fn execute(&self, input: PlaceOrderInput) -> OrderResult<Order> {
        validate_lines(&input.lines)?;
        validate_total_amount(input.total_amount)?;

        let order = Order::new(
            input.user_id,
            input.lines,
            input.total_amount,
            input.status.unwrap_or_default(),
        );
        self.order_repo.insert(&order).await?;

        tracing::info!(
            order_id = %order.order_id,
            user_id = %order.user_id,
            lines = order.lines.len(),
            total_amount = order.total_amount,
            "Order placed"
        );

        Ok(order)
    }
}
