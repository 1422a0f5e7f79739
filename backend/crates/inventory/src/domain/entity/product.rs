//! Product entity

use chrono::{DateTime, Utc};
use kernel::id::ProductId;

/// Products with fewer units than this are reported by the low-stock query.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// A catalog product with its current stock level.
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price. Stored as-is; currency handling is out of scope.
    pub price: f64,
    /// Units on hand, never negative.
    pub stock: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: String, price: f64, stock: i64, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            product_id: ProductId::new(),
            name,
            price,
            stock,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stock value of this product alone.
    pub fn stock_value(&self) -> f64 {
        self.price * self.stock as f64
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_has_matching_timestamps() {
        let product = Product::new("Widget".to_string(), 9.99, 5, None);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_low_stock_boundary() {
        let mut product = Product::new("Widget".to_string(), 9.99, 9, None);
        assert!(product.is_low_stock());
        product.stock = 10;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_stock_value() {
        let product = Product::new("Widget".to_string(), 2.5, 4, None);
        assert_eq!(product.stock_value(), 10.0);
    }
}
