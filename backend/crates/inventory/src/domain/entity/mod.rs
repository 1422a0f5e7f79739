pub mod product;

pub use product::{LOW_STOCK_THRESHOLD, Product};
