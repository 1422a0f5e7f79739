//! Unit tests for the inventory crate
//!
//! Use-case tests run against an in-memory repository double; the router
//! tests drive the HTTP surface through `tower::ServiceExt::oneshot`.

use std::sync::{Arc, Mutex};

use crate::application::{
    CreateProductUseCase, DeleteProductUseCase, QueryProductsUseCase, UpdateProductUseCase,
};
use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::validation::{NewProduct, ProductPatch};
use crate::error::{InventoryError, InventoryResult};
use kernel::id::ProductId;

/// In-memory product repository test double
#[derive(Clone, Default)]
struct MemoryProducts {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductRepository for MemoryProducts {
    async fn insert(&self, product: &Product) -> InventoryResult<()> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn find_all(&self) -> InventoryResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> InventoryResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.product_id == product_id)
            .cloned())
    }

    async fn find_by_ids(&self, product_ids: &[ProductId]) -> InventoryResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| product_ids.contains(&p.product_id))
            .cloned()
            .collect())
    }

    async fn update(&self, product: &Product) -> InventoryResult<()> {
        let mut products = self.products.lock().unwrap();
        if let Some(slot) = products
            .iter_mut()
            .find(|p| p.product_id == product.product_id)
        {
            *slot = product.clone();
        }
        Ok(())
    }

    async fn delete(&self, product_id: &ProductId) -> InventoryResult<bool> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| &p.product_id != product_id);
        Ok(products.len() < before)
    }

    async fn find_below_stock(&self, threshold: i64) -> InventoryResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.stock < threshold)
            .cloned()
            .collect())
    }

    async fn total_stock_value(&self) -> InventoryResult<f64> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .map(Product::stock_value)
            .sum())
    }
}

fn input(name: &str, price: f64, stock: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        stock,
        description: None,
    }
}

#[cfg(test)]
mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_persists_product() {
        let repo = Arc::new(MemoryProducts::default());
        let use_case = CreateProductUseCase::new(repo.clone());

        let product = use_case.execute(input("Widget", 9.99, 5)).await.unwrap();

        let stored = repo.find_by_id(&product.product_id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Widget");
        assert_eq!(stored.stock, 5);
    }

    #[tokio::test]
    async fn test_invalid_input_rejected_before_insert() {
        let repo = Arc::new(MemoryProducts::default());
        let use_case = CreateProductUseCase::new(repo.clone());

        let result = use_case.execute(input("", 9.99, 5)).await;
        assert!(matches!(result, Err(InventoryError::Validation(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}

#[cfg(test)]
mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_patch_changes_only_present_fields() {
        let repo = Arc::new(MemoryProducts::default());
        let created = CreateProductUseCase::new(repo.clone())
            .execute(NewProduct {
                description: Some("blue".to_string()),
                ..input("Widget", 9.99, 5)
            })
            .await
            .unwrap();

        let updated = UpdateProductUseCase::new(repo)
            .execute(
                created.product_id,
                ProductPatch {
                    stock: Some(42),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.stock, 42);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.price, 9.99);
        assert_eq!(updated.description.as_deref(), Some("blue"));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let use_case = UpdateProductUseCase::new(Arc::new(MemoryProducts::default()));

        let result = use_case
            .execute(ProductId::new(), ProductPatch::default())
            .await;

        assert!(matches!(result, Err(InventoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_invalid_patch_rejected() {
        let repo = Arc::new(MemoryProducts::default());
        let created = CreateProductUseCase::new(repo.clone())
            .execute(input("Widget", 9.99, 5))
            .await
            .unwrap();

        let result = UpdateProductUseCase::new(repo.clone())
            .execute(
                created.product_id,
                ProductPatch {
                    stock: Some(-1),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));

        // The stored record is untouched by the rejected patch.
        let stored = repo.find_by_id(&created.product_id).await.unwrap().unwrap();
        assert_eq!(stored.stock, 5);
    }
}

#[cfg(test)]
mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_removes_product() {
        let repo = Arc::new(MemoryProducts::default());
        let created = CreateProductUseCase::new(repo.clone())
            .execute(input("Widget", 9.99, 5))
            .await
            .unwrap();

        DeleteProductUseCase::new(repo.clone())
            .execute(created.product_id)
            .await
            .unwrap();

        assert!(repo.find_by_id(&created.product_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let use_case = DeleteProductUseCase::new(Arc::new(MemoryProducts::default()));

        let result = use_case.execute(ProductId::new()).await;

        assert!(matches!(result, Err(InventoryError::NotFound)));
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    #[tokio::test]
    async fn test_low_stock_uses_strict_threshold() {
        let repo = Arc::new(MemoryProducts::default());
        let create = CreateProductUseCase::new(repo.clone());
        create.execute(input("Scarce", 1.0, 9)).await.unwrap();
        create.execute(input("Boundary", 1.0, 10)).await.unwrap();
        create.execute(input("Plenty", 1.0, 50)).await.unwrap();

        let low = QueryProductsUseCase::new(repo).low_stock().await.unwrap();

        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Scarce");
    }

    #[tokio::test]
    async fn test_total_value_sums_price_times_stock() {
        let repo = Arc::new(MemoryProducts::default());
        let create = CreateProductUseCase::new(repo.clone());
        create.execute(input("A", 2.5, 4)).await.unwrap();
        create.execute(input("B", 10.0, 3)).await.unwrap();

        let total = QueryProductsUseCase::new(repo).total_value().await.unwrap();

        assert_eq!(total, 40.0);
    }

    #[tokio::test]
    async fn test_total_value_tracks_successive_creates() {
        let repo = Arc::new(MemoryProducts::default());
        let create = CreateProductUseCase::new(repo.clone());
        let queries = QueryProductsUseCase::new(repo);

        create.execute(input("Widget", 10.0, 5)).await.unwrap();
        assert_eq!(queries.total_value().await.unwrap(), 50.0);

        create.execute(input("Gadget", 2.0, 3)).await.unwrap();
        assert_eq!(queries.total_value().await.unwrap(), 56.0);

        // Both sit under the threshold, so both show up as low stock.
        assert_eq!(queries.low_stock().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_total_value_of_empty_catalog_is_zero() {
        let use_case = QueryProductsUseCase::new(Arc::new(MemoryProducts::default()));

        assert_eq!(use_case.total_value().await.unwrap(), 0.0);
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use crate::presentation::router::products_router_generic;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_body() {
        let app = products_router_generic(MemoryProducts::default());

        let response = app
            .oneshot(json_request(
                "POST",
                "/",
                serde_json::json!({ "name": "Widget", "price": 9.99, "stock": 5 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["stock"], 5);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_404() {
        let app = products_router_generic(MemoryProducts::default());

        let response = app
            .oneshot(
                Request::get(format!("/{}", ProductId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Product not found");
        assert_eq!(json["status"], 404);
    }

    #[tokio::test]
    async fn test_reporting_routes_are_not_shadowed_by_id() {
        let repo = MemoryProducts::default();
        let app = products_router_generic(repo);

        let response = app
            .oneshot(
                Request::get("/total-value")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["totalValue"], 0.0);
    }
}
