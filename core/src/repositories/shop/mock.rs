//! Mock implementation of ShopRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::shop::Shop;
use crate::errors::{AuthError, DomainError};

use super::trait_::ShopRepository;

/// In-memory shop repository; clones share state
#[derive(Clone, Default)]
pub struct MockShopRepository {
    shops: Arc<RwLock<HashMap<Uuid, Shop>>>,
}

impl MockShopRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored shops
    pub async fn count(&self) -> usize {
        self.shops.read().await.len()
    }

    /// Remove a shop directly, bypassing the trait
    pub async fn remove(&self, id: Uuid) -> Option<Shop> {
        self.shops.write().await.remove(&id)
    }
}

#[async_trait]
impl ShopRepository for MockShopRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Shop>, DomainError> {
        let shops = self.shops.read().await;
        Ok(shops.values().find(|s| s.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Shop>, DomainError> {
        let shops = self.shops.read().await;
        Ok(shops.get(&id).cloned())
    }

    async fn create(&self, shop: Shop) -> Result<Shop, DomainError> {
        let mut shops = self.shops.write().await;

        if shops.values().any(|s| s.email == shop.email) {
            return Err(AuthError::ShopAlreadyRegistered.into());
        }

        shops.insert(shop.id, shop.clone());
        Ok(shop)
    }
}
