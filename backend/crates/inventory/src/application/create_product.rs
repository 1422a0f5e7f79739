//! Create Product Use Case

use std::sync::Arc;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::validation::{NewProduct, validate_new_product};
use crate::error::InventoryResult;

/// Create product use case
pub struct CreateProductUseCase<R>
where
    R: ProductRepository,
{
    product_repo: Arc<R>,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, input: NewProduct) -> InventoryResult<Product> {
        validate_new_product(&input)?;

        let product = Product::new(input.name, input.price, input.stock, input.description);
        self.product_repo.insert(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            name = %product.name,
            stock = product.stock,
            "Product created"
        );

        Ok(product)
    }
}
