//! Orders crate
//!
//! Order intake and owner-scoped order history. Orders reference catalog
//! products by id and carry a per-line price snapshot taken at submission.
//!
//! ## Architecture
//!
//! This crate follows clean architecture:
//! - `domain`: order entity, line validation, and the repository port
//! - `application`: use cases (place / list / get with product resolution)
//! - `infra`: PostgreSQL repository implementation
//! - `presentation`: HTTP handlers, DTOs, and router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-export main types for convenience
pub use domain::entity::order::{Order, OrderLine, OrderStatus};
pub use domain::repository::OrderRepository;
pub use error::{OrderError, OrderResult};
pub use infra::postgres::PgOrderRepository;
pub use presentation::router::orders_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgOrderRepository as OrderStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
