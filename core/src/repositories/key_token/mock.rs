//! Mock implementation of KeyTokenRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::key_token::KeyToken;
use crate::errors::DomainError;

use super::trait_::KeyTokenRepository;

/// In-memory key-token repository; clones share state
#[derive(Clone, Default)]
pub struct MockKeyTokenRepository {
    records: Arc<RwLock<HashMap<Uuid, KeyToken>>>,
}

impl MockKeyTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Snapshot of every stored record
    pub async fn all(&self) -> Vec<KeyToken> {
        self.records.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl KeyTokenRepository for MockKeyTokenRepository {
    async fn upsert(&self, mut key_token: KeyToken) -> Result<KeyToken, DomainError> {
        let mut records = self.records.write().await;

        if let Some(existing) = records.values().find(|r| r.user_id == key_token.user_id) {
            key_token.id = existing.id;
            key_token.created_at = existing.created_at;
        }
        key_token.refresh_tokens_used.clear();
        key_token.updated_at = Utc::now();

        records.retain(|_, r| r.user_id != key_token.user_id);
        records.insert(key_token.id, key_token.clone());
        Ok(key_token)
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<KeyToken>, DomainError> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.user_id == user_id).cloned())
    }

    async fn find_by_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<KeyToken>, DomainError> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.is_current(token_hash)).cloned())
    }

    async fn find_by_used_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<KeyToken>, DomainError> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.has_used(token_hash)).cloned())
    }

    async fn rotate_refresh_token(
        &self,
        id: Uuid,
        current_hash: &str,
        new_hash: &str,
        history_limit: usize,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;

        match records.get_mut(&id) {
            Some(record) if record.is_current(current_hash) => {
                record.rotate(new_hash.to_string(), history_limit);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| r.user_id != user_id);
        Ok((before - records.len()) as u64)
    }
}
