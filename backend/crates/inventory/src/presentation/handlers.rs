//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

use kernel::id::ProductId;

use crate::application::{
    CreateProductUseCase, DeleteProductUseCase, QueryProductsUseCase, UpdateProductUseCase,
};
use crate::domain::repository::ProductRepository;
use crate::error::InventoryResult;
use crate::presentation::dto::{
    CreateProductRequest, ProductResponse, TotalValueResponse, UpdateProductRequest,
};

/// Shared state for inventory handlers
#[derive(Clone)]
pub struct InventoryAppState<R>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// CRUD
// ============================================================================

/// POST /api/products
pub async fn create_product<R>(
    State(state): State<InventoryAppState<R>>,
    Json(req): Json<CreateProductRequest>,
) -> InventoryResult<(StatusCode, Json<ProductResponse>)>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateProductUseCase::new(state.repo.clone());
    let product = use_case.execute(req.into_input()).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// GET /api/products
pub async fn list_products<R>(
    State(state): State<InventoryAppState<R>>,
) -> InventoryResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryProductsUseCase::new(state.repo.clone());
    let products = use_case.list().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /api/products/{id}
pub async fn get_product<R>(
    State(state): State<InventoryAppState<R>>,
    Path(product_id): Path<ProductId>,
) -> InventoryResult<Json<ProductResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryProductsUseCase::new(state.repo.clone());
    let product = use_case.get(product_id).await?;

    Ok(Json(product.into()))
}

/// PUT /api/products/{id}
pub async fn update_product<R>(
    State(state): State<InventoryAppState<R>>,
    Path(product_id): Path<ProductId>,
    Json(req): Json<UpdateProductRequest>,
) -> InventoryResult<Json<ProductResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProductUseCase::new(state.repo.clone());
    let product = use_case.execute(product_id, req.into_patch()).await?;

    Ok(Json(product.into()))
}

/// DELETE /api/products/{id}
pub async fn delete_product<R>(
    State(state): State<InventoryAppState<R>>,
    Path(product_id): Path<ProductId>,
) -> InventoryResult<Json<Value>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteProductUseCase::new(state.repo.clone());
    use_case.execute(product_id).await?;

    Ok(Json(json!({ "message": "Product deleted" })))
}

// ============================================================================
// Reporting
// ============================================================================

/// GET /api/products/low-stock
pub async fn low_stock_products<R>(
    State(state): State<InventoryAppState<R>>,
) -> InventoryResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryProductsUseCase::new(state.repo.clone());
    let products = use_case.low_stock().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /api/products/total-value
pub async fn total_inventory_value<R>(
    State(state): State<InventoryAppState<R>>,
) -> InventoryResult<Json<TotalValueResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryProductsUseCase::new(state.repo.clone());
    let total_value = use_case.total_value().await?;

    Ok(Json(TotalValueResponse { total_value }))
}
