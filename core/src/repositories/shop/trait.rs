//! Shop repository trait defining the interface for shop persistence.
//!
//! The store owns email uniqueness; implementations report a duplicate
//! email as `AuthError::ShopAlreadyRegistered`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::shop::Shop;
use crate::errors::DomainError;

/// Repository trait for Shop entity persistence operations
#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// Find a shop by its (normalized) email
    ///
    /// # Returns
    /// * `Ok(Some(Shop))` - Shop found
    /// * `Ok(None)` - No shop registered with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Shop>, DomainError>;

    /// Find a shop by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Shop>, DomainError>;

    /// Persist a new shop
    ///
    /// # Returns
    /// * `Ok(Shop)` - The created shop
    /// * `Err(DomainError::Auth(AuthError::ShopAlreadyRegistered))` - Email taken
    /// * `Err(DomainError)` - Creation failed
    async fn create(&self, shop: Shop) -> Result<Shop, DomainError>;
}
