//! Order Query Use Cases
//!
//! Reads resolve each line's product reference into a full product
//! snapshot. A line whose product was deleted from the catalog keeps its
//! quantity and price but resolves to no product.

use std::collections::HashMap;
use std::sync::Arc;

use inventory::domain::entity::product::Product;
use inventory::domain::repository::ProductRepository;
use kernel::id::{OrderId, ProductId, UserId};

use crate::domain::entity::order::{Order, OrderStatus};
use crate::domain::repository::OrderRepository;
use crate::error::{OrderError, OrderResult};

/// One order line with its product reference resolved.
#[derive(Debug, Clone)]
pub struct PopulatedLine {
    /// `None` when the product no longer exists in the catalog.
    pub product: Option<Product>,
    pub quantity: i64,
    pub price: f64,
}

/// An order with all product references resolved.
#[derive(Debug, Clone)]
pub struct PopulatedOrder {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub lines: Vec<PopulatedLine>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Order query use case
pub struct QueryOrdersUseCase<O, P>
where
    O: OrderRepository,
    P: ProductRepository,
{
    order_repo: Arc<O>,
    product_repo: Arc<P>,
}

impl<O, P> QueryOrdersUseCase<O, P>
where
    O: OrderRepository,
    P: ProductRepository,
{
    pub fn new(order_repo: Arc<O>, product_repo: Arc<P>) -> Self {
        Self {
            order_repo,
            product_repo,
        }
    }

    pub async fn list(&self, user_id: UserId) -> OrderResult<Vec<PopulatedOrder>> {
        let orders = self.order_repo.find_by_owner(&user_id).await?;
        self.populate(orders).await
    }

    pub async fn get(&self, order_id: OrderId, user_id: UserId) -> OrderResult<PopulatedOrder> {
        let order = self
            .order_repo
            .find_by_id_for_owner(&order_id, &user_id)
            .await?
            .ok_or(OrderError::NotFound)?;

        let mut populated = self.populate(vec![order]).await?;
        populated
            .pop()
            .ok_or_else(|| OrderError::Internal("Populated order vanished".to_string()))
    }

    /// Resolve product references for a batch of orders with one catalog
    /// round trip.
    async fn populate(&self, orders: Vec<Order>) -> OrderResult<Vec<PopulatedOrder>> {
        let mut product_ids: Vec<ProductId> = orders
            .iter()
            .flat_map(|o| o.lines.iter().map(|l| l.product_id))
            .collect();
        product_ids.sort_unstable_by_key(|id| *id.as_uuid());
        product_ids.dedup();

        let products: HashMap<ProductId, Product> = self
            .product_repo
            .find_by_ids(&product_ids)
            .await?
            .into_iter()
            .map(|p| (p.product_id, p))
            .collect();

        Ok(orders
            .into_iter()
            .map(|order| PopulatedOrder {
                order_id: order.order_id,
                user_id: order.user_id,
                lines: order
                    .lines
                    .into_iter()
                    .map(|line| PopulatedLine {
                        product: products.get(&line.product_id).cloned(),
                        quantity: line.quantity,
                        price: line.price,
                    })
                    .collect(),
                total_amount: order.total_amount,
                status: order.status,
                created_at: order.created_at,
                updated_at: order.updated_at,
            })
            .collect())
    }
}
