//! Product catalogue services
//!
//! - `factory` - Type-tag dispatch for product creation
//! - `service` - Update, publication and query operations

mod factory;
mod service;

#[cfg(test)]
mod tests;

pub use factory::{AttributeHandler, ProductFactory};
pub use service::ProductService;
