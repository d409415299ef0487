//! Inventory repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::inventory::Inventory;
use crate::errors::DomainError;

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Insert an inventory row
    async fn insert(&self, inventory: Inventory) -> Result<Inventory, DomainError>;

    /// Find the inventory row of a product
    async fn find_by_product(&self, product_id: Uuid) -> Result<Option<Inventory>, DomainError>;

    /// Delete the inventory rows of a product
    async fn delete_by_product(&self, product_id: Uuid) -> Result<u64, DomainError>;
}
