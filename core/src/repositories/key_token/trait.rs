//! Key-token repository trait: per-shop key material and refresh-token
//! rotation state.
//!
//! Refresh tokens cross this boundary only as SHA-256 hex digests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::key_token::KeyToken;
use crate::errors::DomainError;

/// Repository trait for KeyToken persistence operations
#[async_trait]
pub trait KeyTokenRepository: Send + Sync {
    /// Store `key_token` as the only record of its shop
    ///
    /// An existing record for the same `user_id` keeps its id but has its
    /// keys and current token replaced and its used history cleared.
    async fn upsert(&self, key_token: KeyToken) -> Result<KeyToken, DomainError>;

    /// Find the record of a shop
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<KeyToken>, DomainError>;

    /// Find the record whose current refresh token hash is `token_hash`
    async fn find_by_refresh_token(&self, token_hash: &str)
        -> Result<Option<KeyToken>, DomainError>;

    /// Find the record whose used history contains `token_hash`
    async fn find_by_used_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<KeyToken>, DomainError>;

    /// Atomically replace the current hash and record the old one as used
    ///
    /// The update only applies while the record's current hash still equals
    /// `current_hash`. The used history is trimmed to `history_limit`
    /// entries, oldest first.
    ///
    /// # Returns
    /// * `Ok(true)` - The rotation was applied
    /// * `Ok(false)` - The record is gone or another rotation won
    async fn rotate_refresh_token(
        &self,
        id: Uuid,
        current_hash: &str,
        new_hash: &str,
        history_limit: usize,
    ) -> Result<bool, DomainError>;

    /// Delete a record by id; `Ok(false)` when it does not exist
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every record of a shop, returning how many were removed
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<u64, DomainError>;
}
