//! # ShopDev Core
//!
//! Domain layer of the ShopDev backend: shop and product entities, the
//! access (session) and product services, repository interfaces and the
//! error types shared by the outer layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Inventory, KeyPair, KeyToken, Product, ProductAttributes, ProductType, Shop, TokenPair,
    TokenPayload,
};
pub use domain::value_objects::{
    AuthContext, AuthResponse, ProductDraft, ProductPatch, ProductSort, ProductSummary,
    RefreshResponse, ShopInfo,
};
pub use errors::{
    AuthError, DomainError, DomainResult, ErrorKind, ProductError, TokenError, ValidationError,
};
pub use repositories::{InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository};
pub use services::{
    AccessService, AccessServiceConfig, ProductFactory, ProductService, TokenService,
    TokenServiceConfig,
};
