//! MySQL implementation of the KeyTokenRepository trait.
//!
//! A record lives in `key_tokens` (one row per shop); its rotated refresh
//! token hashes live in `key_token_used_refresh_tokens`, ordered by their
//! auto-increment id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, Transaction};
use tracing::debug;
use uuid::Uuid;

use shop_core::domain::entities::key_token::KeyToken;
use shop_core::errors::DomainError;
use shop_core::repositories::KeyTokenRepository;

use super::{column, db_error, uuid_column};

/// MySQL implementation of KeyTokenRepository
pub struct MySqlKeyTokenRepository {
    pool: MySqlPool,
}

impl MySqlKeyTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Map a `key_tokens` row; the used history is loaded separately
    fn row_to_key_token(row: &MySqlRow) -> Result<KeyToken, DomainError> {
        Ok(KeyToken {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            public_key: column(row, "public_key")?,
            private_key: column(row, "private_key")?,
            refresh_token: column(row, "refresh_token")?,
            refresh_tokens_used: Vec::new(),
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    async fn used_history(&self, key_token_id: Uuid) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query(
            "SELECT token_hash FROM key_token_used_refresh_tokens WHERE key_token_id = ? ORDER BY id ASC",
        )
        .bind(key_token_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to load used refresh tokens"))?;

        rows.iter().map(|row| column(row, "token_hash")).collect()
    }

    async fn find_one(&self, query: &str, value: String) -> Result<Option<KeyToken>, DomainError> {
        let row = sqlx::query(query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find key token"))?;

        match row {
            Some(row) => {
                let mut key_token = Self::row_to_key_token(&row)?;
                key_token.refresh_tokens_used = self.used_history(key_token.id).await?;
                Ok(Some(key_token))
            }
            None => Ok(None),
        }
    }

    /// Keep only the newest `limit` history rows of a record
    async fn trim_history(
        tx: &mut Transaction<'_, MySql>,
        key_token_id: &str,
        limit: usize,
    ) -> Result<u64, DomainError> {
        // MySQL rejects LIMIT inside IN subqueries unless wrapped in a derived table
        let query = r#"
            DELETE FROM key_token_used_refresh_tokens
            WHERE key_token_id = ?
              AND id NOT IN (
                SELECT id FROM (
                    SELECT id FROM key_token_used_refresh_tokens
                    WHERE key_token_id = ?
                    ORDER BY id DESC
                    LIMIT ?
                ) AS recent
              )
        "#;

        let result = sqlx::query(query)
            .bind(key_token_id)
            .bind(key_token_id)
            .bind(limit.max(1) as u64)
            .execute(&mut **tx)
            .await
            .map_err(db_error("Failed to trim used refresh tokens"))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl KeyTokenRepository for MySqlKeyTokenRepository {
    async fn upsert(&self, key_token: KeyToken) -> Result<KeyToken, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let query = r#"
            INSERT INTO key_tokens (
                id, user_id, public_key, private_key, refresh_token, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                public_key = VALUES(public_key),
                private_key = VALUES(private_key),
                refresh_token = VALUES(refresh_token),
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(key_token.id.to_string())
            .bind(key_token.user_id.to_string())
            .bind(&key_token.public_key)
            .bind(&key_token.private_key)
            .bind(&key_token.refresh_token)
            .bind(key_token.created_at)
            .bind(key_token.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to upsert key token"))?;

        sqlx::query(
            r#"
            DELETE u FROM key_token_used_refresh_tokens u
            JOIN key_tokens k ON k.id = u.key_token_id
            WHERE k.user_id = ?
            "#,
        )
        .bind(key_token.user_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to clear used refresh tokens"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit key token upsert"))?;

        self.find_by_user_id(key_token.user_id)
            .await?
            .ok_or_else(|| DomainError::internal("key token vanished after upsert"))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<KeyToken>, DomainError> {
        self.find_one(
            r#"
            SELECT id, user_id, public_key, private_key, refresh_token, created_at, updated_at
            FROM key_tokens
            WHERE user_id = ?
            LIMIT 1
            "#,
            user_id.to_string(),
        )
        .await
    }

    async fn find_by_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<KeyToken>, DomainError> {
        self.find_one(
            r#"
            SELECT id, user_id, public_key, private_key, refresh_token, created_at, updated_at
            FROM key_tokens
            WHERE refresh_token = ?
            LIMIT 1
            "#,
            token_hash.to_string(),
        )
        .await
    }

    async fn find_by_used_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<KeyToken>, DomainError> {
        self.find_one(
            r#"
            SELECT k.id, k.user_id, k.public_key, k.private_key, k.refresh_token,
                   k.created_at, k.updated_at
            FROM key_tokens k
            JOIN key_token_used_refresh_tokens u ON u.key_token_id = k.id
            WHERE u.token_hash = ?
            LIMIT 1
            "#,
            token_hash.to_string(),
        )
        .await
    }

    async fn rotate_refresh_token(
        &self,
        id: Uuid,
        current_hash: &str,
        new_hash: &str,
        history_limit: usize,
    ) -> Result<bool, DomainError> {
        let id = id.to_string();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let updated = sqlx::query(
            r#"
            UPDATE key_tokens
            SET refresh_token = ?, updated_at = ?
            WHERE id = ? AND refresh_token = ?
            "#,
        )
        .bind(new_hash)
        .bind(Utc::now())
        .bind(&id)
        .bind(current_hash)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to rotate refresh token"))?;

        if updated.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(db_error("Failed to roll back rotation"))?;
            debug!(key_token_id = %id, "Rotation lost: current token no longer matches");
            return Ok(false);
        }

        sqlx::query(
            r#"
            INSERT INTO key_token_used_refresh_tokens (key_token_id, token_hash, used_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(current_hash)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to record used refresh token"))?;

        let evicted = Self::trim_history(&mut tx, &id, history_limit).await?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit rotation"))?;

        debug!(key_token_id = %id, evicted, "Refresh token rotated");
        Ok(true)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM key_tokens WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete key token"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM key_tokens WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete key tokens"))?;

        Ok(result.rows_affected())
    }
}
