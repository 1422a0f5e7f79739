//! Inventory crate
//!
//! Product catalog with stock tracking. Exposes CRUD over products plus two
//! reporting queries: low-stock listing and total inventory value.
//!
//! ## Architecture
//!
//! This crate follows clean architecture:
//! - `domain`: product entity, input validation, and the repository port
//! - `application`: use cases (create / update / delete / query)
//! - `infra`: PostgreSQL repository implementation
//! - `presentation`: HTTP handlers, DTOs, and router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-export main types for convenience
pub use domain::entity::product::{LOW_STOCK_THRESHOLD, Product};
pub use domain::repository::ProductRepository;
pub use error::{InventoryError, InventoryResult};
pub use infra::postgres::PgProductRepository;
pub use presentation::router::products_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgProductRepository as ProductStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
