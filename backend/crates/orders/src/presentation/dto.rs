//! API DTOs (Data Transfer Objects)
//!
//! Order payloads call the line array `products` and each line's reference
//! `product`, matching the client contract.

use chrono::{DateTime, Utc};
use inventory::presentation::dto::ProductResponse;
use kernel::id::{OrderId, ProductId, UserId};
use serde::{Deserialize, Serialize};

use crate::application::{PopulatedLine, PopulatedOrder};
use crate::domain::entity::order::{Order, OrderLine, OrderStatus};

// ============================================================================
// Requests
// ============================================================================

/// One submitted order line
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product: ProductId,
    pub quantity: i64,
    pub price: f64,
}

impl OrderLineRequest {
    pub fn into_line(self) -> OrderLine {
        OrderLine {
            product_id: self.product,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Place order request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub products: Vec<OrderLineRequest>,
    pub total_amount: f64,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

// ============================================================================
// Responses
// ============================================================================

/// Order line carrying the raw product reference
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub product: ProductId,
    pub quantity: i64,
    pub price: f64,
}

/// Order as stored, returned from intake
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub products: Vec<OrderLineResponse>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            user_id: order.user_id,
            products: order
                .lines
                .into_iter()
                .map(|line| OrderLineResponse {
                    product: line.product_id,
                    quantity: line.quantity,
                    price: line.price,
                })
                .collect(),
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Order line with the product reference resolved; `product` is null when
/// the product was removed from the catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedLineResponse {
    pub product: Option<ProductResponse>,
    pub quantity: i64,
    pub price: f64,
}

/// Order with product snapshots, returned from reads
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedOrderResponse {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub products: Vec<PopulatedLineResponse>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PopulatedOrder> for PopulatedOrderResponse {
    fn from(order: PopulatedOrder) -> Self {
        Self {
            order_id: order.order_id,
            user_id: order.user_id,
            products: order
                .lines
                .into_iter()
                .map(PopulatedLine::into)
                .collect(),
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl From<PopulatedLine> for PopulatedLineResponse {
    fn from(line: PopulatedLine) -> Self {
        Self {
            product: line.product.map(ProductResponse::from),
            quantity: line.quantity,
            price: line.price,
        }
    }
}
