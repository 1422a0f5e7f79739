//! Inventory Router

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::infra::postgres::PgProductRepository;
use crate::presentation::handlers::{self, InventoryAppState};

/// Create the products router with PostgreSQL repository
pub fn products_router(repo: PgProductRepository) -> Router {
    products_router_generic(repo)
}

/// Create a generic products router for any repository implementation
pub fn products_router_generic<R>(repo: R) -> Router
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let state = InventoryAppState {
        repo: Arc::new(repo),
    };

    // Literal segments are registered alongside "/{id}"; the router matches
    // them before the parameter route.
    Router::new()
        .route("/", get(handlers::list_products::<R>))
        .route("/", post(handlers::create_product::<R>))
        .route("/low-stock", get(handlers::low_stock_products::<R>))
        .route("/total-value", get(handlers::total_inventory_value::<R>))
        .route("/{id}", get(handlers::get_product::<R>))
        .route("/{id}", put(handlers::update_product::<R>))
        .route("/{id}", delete(handlers::delete_product::<R>))
        .with_state(state)
}
