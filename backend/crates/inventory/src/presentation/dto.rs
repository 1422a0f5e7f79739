//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::product::Product;
use crate::domain::validation::{NewProduct, ProductPatch};

// ============================================================================
// Requests
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateProductRequest {
    pub fn into_input(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            stock: self.stock,
            description: self.description,
        }
    }
}

/// Update product request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub description: Option<String>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            price: self.price,
            stock: self.stock,
            description: self.description,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Product response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            description: product.description,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Aggregate inventory value
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalValueResponse {
    pub total_value: f64,
}
