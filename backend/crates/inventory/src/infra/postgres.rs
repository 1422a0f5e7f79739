//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::InventoryResult;

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str = r#"
    product_id,
    name,
    price,
    stock,
    description,
    created_at,
    updated_at
"#;

impl ProductRepository for PgProductRepository {
    async fn insert(&self, product: &Product) -> InventoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                name,
                price,
                stock,
                description,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.description)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> InventoryResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> InventoryResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn find_by_ids(&self, product_ids: &[ProductId]) -> InventoryResult<Vec<Product>> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = product_ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = ANY($1)"
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn update(&self, product: &Product) -> InventoryResult<()> {
        sqlx::query(
            r#"
            UPDATE products
            SET name = $2,
                price = $3,
                stock = $4,
                description = $5,
                updated_at = $6
            WHERE product_id = $1
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.description)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, product_id: &ProductId) -> InventoryResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_below_stock(&self, threshold: i64) -> InventoryResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE stock < $1 ORDER BY stock"
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn total_stock_value(&self) -> InventoryResult<f64> {
        // COALESCE keeps the empty-catalog answer at 0 instead of NULL.
        let total = sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(price * stock), 0)::DOUBLE PRECISION FROM products",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    name: String,
    price: f64,
    stock: i64,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            name: self.name,
            price: self.price,
            stock: self.stock,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
