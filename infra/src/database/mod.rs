//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management and schema migrations
//! - Repository implementations for shops, key tokens, products and inventories

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlInventoryRepository, MySqlKeyTokenRepository, MySqlProductRepository,
    MySqlShopRepository,
};
