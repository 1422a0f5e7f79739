//! Update Product Use Case
//!
//! Applies a partial update: fields absent from the patch keep their
//! stored value.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::ProductId;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::validation::{ProductPatch, validate_patch};
use crate::error::{InventoryError, InventoryResult};

/// Update product use case
pub struct UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    product_repo: Arc<R>,
}

impl<R> UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(
        &self,
        product_id: ProductId,
        patch: ProductPatch,
    ) -> InventoryResult<Product> {
        validate_patch(&patch)?;

        let mut product = self
            .product_repo
            .find_by_id(&product_id)
            .await?
            .ok_or(InventoryError::NotFound)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(description) = patch.description {
            product.description = Some(description);
        }
        product.updated_at = Utc::now();

        self.product_repo.update(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            stock = product.stock,
            "Product updated"
        );

        Ok(product)
    }
}
