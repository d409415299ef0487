//! Shared utilities and common types for the ShopDev server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error and success response envelopes
//! - Pagination and validation helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig,
};
pub use errors::{error_codes, ApiResult, ErrorResponse, IntoErrorResponse};
pub use types::{Pagination, SuccessResponse};
pub use utils::validation;
