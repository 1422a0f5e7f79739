//! Product repository port

use kernel::id::ProductId;

use crate::domain::entity::product::Product;
use crate::error::InventoryResult;

/// Storage port for products.
///
/// The reporting queries (`find_below_stock`, `total_stock_value`) are part
/// of the port so implementations can push them down to the database.
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    async fn insert(&self, product: &Product) -> InventoryResult<()>;

    async fn find_all(&self) -> InventoryResult<Vec<Product>>;

    async fn find_by_id(&self, product_id: &ProductId) -> InventoryResult<Option<Product>>;

    /// Fetch a batch of products by id. Missing ids are silently absent
    /// from the result.
    async fn find_by_ids(&self, product_ids: &[ProductId]) -> InventoryResult<Vec<Product>>;

    async fn update(&self, product: &Product) -> InventoryResult<()>;

    /// Returns `false` when no row matched the id.
    async fn delete(&self, product_id: &ProductId) -> InventoryResult<bool>;

    /// Products whose stock is strictly below `threshold`.
    async fn find_below_stock(&self, threshold: i64) -> InventoryResult<Vec<Product>>;

    /// Sum of `price * stock` across the whole catalog; `0.0` when empty.
    async fn total_stock_value(&self) -> InventoryResult<f64>;
}
