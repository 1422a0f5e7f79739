//! PostgreSQL Repository Implementation
//!
//! Orders span two tables: `orders` for the header and `order_lines` for
//! the lines, kept in submission order by the `position` column.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kernel::id::{OrderId, ProductId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::order::{Order, OrderLine};
use crate::domain::repository::OrderRepository;
use crate::error::{OrderError, OrderResult};

/// PostgreSQL-backed order repository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn lines_for(&self, order_ids: &[Uuid]) -> OrderResult<HashMap<Uuid, Vec<OrderLine>>> {
        let rows = sqlx::query_as::<_, LineRow>(
            r#"
            SELECT
                order_id,
                product_id,
                quantity,
                price
            FROM order_lines
            WHERE order_id = ANY($1)
            ORDER BY order_id, position
            "#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut lines: HashMap<Uuid, Vec<OrderLine>> = HashMap::new();
        for row in rows {
            lines.entry(row.order_id).or_default().push(OrderLine {
                product_id: ProductId::from_uuid(row.product_id),
                quantity: row.quantity,
                price: row.price,
            });
        }
        Ok(lines)
    }
}

impl OrderRepository for PgOrderRepository {
    async fn insert(&self, order: &Order) -> OrderResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id,
                user_id,
                total_amount,
                status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(order.order_id.as_uuid())
        .bind(order.user_id.as_uuid())
        .bind(order.total_amount)
        .bind(order.status.as_str())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&mut *tx)
        .await?;

        for (position, line) in order.lines.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_lines (
                    order_id,
                    position,
                    product_id,
                    quantity,
                    price
                ) VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(order.order_id.as_uuid())
            .bind(position as i32)
            .bind(line.product_id.as_uuid())
            .bind(line.quantity)
            .bind(line.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_owner(&self, user_id: &UserId) -> OrderResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                order_id,
                user_id,
                total_amount,
                status,
                created_at,
                updated_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let order_ids: Vec<Uuid> = rows.iter().map(|r| r.order_id).collect();
        let mut lines = self.lines_for(&order_ids).await?;

        rows.into_iter()
            .map(|row| {
                let order_lines = lines.remove(&row.order_id).unwrap_or_default();
                row.into_order(order_lines)
            })
            .collect()
    }

    async fn find_by_id_for_owner(
        &self,
        order_id: &OrderId,
        user_id: &UserId,
    ) -> OrderResult<Option<Order>> {
        // Ownership is part of the lookup key, so a foreign order falls
        // through to None like a nonexistent one.
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                order_id,
                user_id,
                total_amount,
                status,
                created_at,
                updated_at
            FROM orders
            WHERE order_id = $1 AND user_id = $2
            "#,
        )
        .bind(order_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut lines = self.lines_for(&[row.order_id]).await?;
        let order_lines = lines.remove(&row.order_id).unwrap_or_default();

        row.into_order(order_lines).map(Some)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct OrderRow {
    order_id: Uuid,
    user_id: Uuid,
    total_amount: f64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, lines: Vec<OrderLine>) -> OrderResult<Order> {
        let status = self
            .status
            .parse()
            .map_err(|e: String| OrderError::Internal(format!("Stored status invalid: {e}")))?;

        Ok(Order {
            order_id: OrderId::from_uuid(self.order_id),
            user_id: UserId::from_uuid(self.user_id),
            lines,
            total_amount: self.total_amount,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LineRow {
    order_id: Uuid,
    product_id: Uuid,
    quantity: i64,
    price: f64,
}
