//! Orders Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use inventory::domain::repository::ProductRepository;
use inventory::infra::postgres::PgProductRepository;

use crate::domain::repository::OrderRepository;
use crate::infra::postgres::PgOrderRepository;
use crate::presentation::handlers::{self, OrdersAppState};

/// Create the orders router with PostgreSQL repositories
pub fn orders_router(orders: PgOrderRepository, products: PgProductRepository) -> Router {
    orders_router_generic(orders, products)
}

/// Create a generic orders router for any repository implementations
pub fn orders_router_generic<O, P>(orders: O, products: P) -> Router
where
    O: OrderRepository + Clone + Send + Sync + 'static,
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let state = OrdersAppState {
        orders: Arc::new(orders),
        products: Arc::new(products),
    };

    Router::new()
        .route("/", post(handlers::place_order::<O, P>))
        .route("/", get(handlers::list_orders::<O, P>))
        .route("/{id}", get(handlers::get_order::<O, P>))
        .with_state(state)
}
