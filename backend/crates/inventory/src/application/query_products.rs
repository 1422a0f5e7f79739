//! Product Query Use Cases
//!
//! Read-side operations share one use case: listing, point lookup, and the
//! two reporting queries.

use std::sync::Arc;

use kernel::id::ProductId;

use crate::domain::entity::product::{LOW_STOCK_THRESHOLD, Product};
use crate::domain::repository::ProductRepository;
use crate::error::{InventoryError, InventoryResult};

/// Product query use case
pub struct QueryProductsUseCase<R>
where
    R: ProductRepository,
{
    product_repo: Arc<R>,
}

impl<R> QueryProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }

    pub async fn list(&self) -> InventoryResult<Vec<Product>> {
        self.product_repo.find_all().await
    }

    pub async fn get(&self, product_id: ProductId) -> InventoryResult<Product> {
        self.product_repo
            .find_by_id(&product_id)
            .await?
            .ok_or(InventoryError::NotFound)
    }

    pub async fn low_stock(&self) -> InventoryResult<Vec<Product>> {
        self.product_repo.find_below_stock(LOW_STOCK_THRESHOLD).await
    }

    pub async fn total_value(&self) -> InventoryResult<f64> {
        self.product_repo.total_stock_value().await
    }
}
