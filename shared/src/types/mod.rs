//! Type definitions module
//!
//! - `pagination` - Pagination for list endpoints
//! - `response` - Success envelope returned by every endpoint

pub mod pagination;
pub mod response;

pub use pagination::Pagination;
pub use response::SuccessResponse;
