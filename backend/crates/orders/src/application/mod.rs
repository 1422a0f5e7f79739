//! Order use cases

pub mod place_order;
pub mod query_orders;

pub use place_order::{PlaceOrderInput, PlaceOrderUseCase};
pub use query_orders::{PopulatedLine, PopulatedOrder, QueryOrdersUseCase};
