//! Delete Product Use Case

use std::sync::Arc;

use kernel::id::ProductId;

use crate::domain::repository::ProductRepository;
use crate::error::{InventoryError, InventoryResult};

/// Delete product use case
pub struct DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    product_repo: Arc<R>,
}

impl<R> DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, product_id: ProductId) -> InventoryResult<()> {
        if !self.product_repo.delete(&product_id).await? {
            return Err(InventoryError::NotFound);
        }

        tracing::info!(product_id = %product_id, "Product deleted");
        Ok(())
    }
}
