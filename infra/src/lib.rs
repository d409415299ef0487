//! # Infrastructure Layer
//!
//! Concrete storage for the ShopDev backend: a MySQL connection pool and
//! the SQLx implementations of the repository traits declared in
//! `shop_core`.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use shop_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration used by infrastructure services
pub mod config {
    pub use shop_shared::config::DatabaseConfig;
}

#[cfg(feature = "mysql")]
pub use database::{
    DatabasePool, MySqlInventoryRepository, MySqlKeyTokenRepository, MySqlProductRepository,
    MySqlShopRepository, PoolStatistics,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
