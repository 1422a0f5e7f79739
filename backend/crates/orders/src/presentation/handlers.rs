//! HTTP Handlers
//!
//! All order routes sit behind the bearer-token gate; the caller identity
//! comes from the `AuthenticatedUser` extractor, never from the body.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::AuthenticatedUser;
use inventory::domain::repository::ProductRepository;
use kernel::id::OrderId;

use crate::application::{PlaceOrderInput, PlaceOrderUseCase, QueryOrdersUseCase};
use crate::domain::repository::OrderRepository;
use crate::error::OrderResult;
use crate::presentation::dto::{
    OrderLineRequest, OrderResponse, PlaceOrderRequest, PopulatedOrderResponse,
};

/// Shared state for order handlers
#[derive(Clone)]
pub struct OrdersAppState<O, P>
where
    O: OrderRepository + Clone + Send + Sync + 'static,
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    pub orders: Arc<O>,
    pub products: Arc<P>,
}

/// POST /api/orders
pub async fn place_order<O, P>(
    State(state): State<OrdersAppState<O, P>>,
    user: AuthenticatedUser,
    Json(req): Json<PlaceOrderRequest>,
) -> OrderResult<(StatusCode, Json<OrderResponse>)>
where
    O: OrderRepository + Clone + Send + Sync + 'static,
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = PlaceOrderUseCase::new(state.orders.clone());

    let input = PlaceOrderInput {
        user_id: user.user_id,
        lines: req
            .products
            .into_iter()
            .map(OrderLineRequest::into_line)
            .collect(),
        total_amount: req.total_amount,
        status: req.status,
    };

    let order = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// GET /api/orders
pub async fn list_orders<O, P>(
    State(state): State<OrdersAppState<O, P>>,
    user: AuthenticatedUser,
) -> OrderResult<Json<Vec<PopulatedOrderResponse>>>
where
    O: OrderRepository + Clone + Send + Sync + 'static,
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryOrdersUseCase::new(state.orders.clone(), state.products.clone());
    let orders = use_case.list(user.user_id).await?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// GET /api/orders/{id}
pub async fn get_order<O, P>(
    State(state): State<OrdersAppState<O, P>>,
    user: AuthenticatedUser,
    Path(order_id): Path<OrderId>,
) -> OrderResult<Json<PopulatedOrderResponse>>
where
    O: OrderRepository + Clone + Send + Sync + 'static,
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryOrdersUseCase::new(state.orders.clone(), state.products.clone());
    let order = use_case.get(order_id, user.user_id).await?;

    Ok(Json(order.into()))
}
