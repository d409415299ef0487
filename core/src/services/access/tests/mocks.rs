//! Test fixtures for the access service

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::key_token::KeyToken;
use crate::errors::DomainError;
use crate::repositories::{KeyTokenRepository, MockKeyTokenRepository, MockShopRepository};
use crate::services::access::{AccessService, AccessServiceConfig};
use crate::services::token::TokenService;

/// Lowest bcrypt cost, keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub struct Fixture<K: KeyTokenRepository = MockKeyTokenRepository> {
    pub service: AccessService<MockShopRepository, K>,
    pub shops: MockShopRepository,
    pub keys: K,
}

pub fn test_config() -> AccessServiceConfig {
    AccessServiceConfig {
        bcrypt_cost: TEST_BCRYPT_COST,
        ..Default::default()
    }
}

pub fn fixture() -> Fixture {
    fixture_with(MockKeyTokenRepository::new(), test_config())
}

pub fn fixture_with<K>(keys: K, config: AccessServiceConfig) -> Fixture<K>
where
    K: KeyTokenRepository + Clone,
{
    let shops = MockShopRepository::new();
    let service = AccessService::new(
        Arc::new(shops.clone()),
        Arc::new(keys.clone()),
        Arc::new(TokenService::default()),
        config,
    );
    Fixture {
        service,
        shops,
        keys,
    }
}

/// Key-token store where another refresh always wins the race: the
/// conditional rotation is applied underneath right before the caller's
/// own rotation runs.
#[derive(Clone, Default)]
pub struct RacingKeyTokenRepository {
    pub inner: MockKeyTokenRepository,
}

#[async_trait]
impl KeyTokenRepository for RacingKeyTokenRepository {
    async fn upsert(&self, key_token: KeyToken) -> Result<KeyToken, DomainError> {
        self.inner.upsert(key_token).await
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<KeyToken>, DomainError> {
        self.inner.find_by_user_id(user_id).await
    }

    async fn find_by_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<KeyToken>, DomainError> {
        self.inner.find_by_refresh_token(token_hash).await
    }

    async fn find_by_used_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<KeyToken>, DomainError> {
        self.inner.find_by_used_refresh_token(token_hash).await
    }

    async fn rotate_refresh_token(
        &self,
        id: Uuid,
        current_hash: &str,
        new_hash: &str,
        history_limit: usize,
    ) -> Result<bool, DomainError> {
        self.inner
            .rotate_refresh_token(id, current_hash, "winner", history_limit)
            .await?;
        self.inner
            .rotate_refresh_token(id, current_hash, new_hash, history_limit)
            .await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        self.inner.delete_by_id(id).await
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<u64, DomainError> {
        self.inner.delete_by_user_id(user_id).await
    }
}
