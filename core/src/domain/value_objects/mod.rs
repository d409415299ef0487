//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod product_input;

// Re-export commonly used types
pub use auth_response::{AuthContext, AuthResponse, RefreshResponse, ShopInfo};
pub use product_input::{
    ProductDraft, ProductPatch, ProductSort, ProductSummary, Publication, ShopProductQuery,
};
