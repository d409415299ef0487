//! Per-shop key material and refresh-token session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default bound on the remembered used-token history
pub const DEFAULT_USED_TOKEN_HISTORY_LIMIT: usize = 50;

/// Key record for one shop session
///
/// Refresh tokens are only ever held as SHA-256 hex digests. The
/// `refresh_tokens_used` history is ordered oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyToken {
    pub id: Uuid,

    /// Owning shop
    pub user_id: Uuid,

    /// Ed25519 public key (SPKI PEM)
    pub public_key: String,

    /// Ed25519 private key (PKCS#8 PEM)
    #[serde(skip_serializing)]
    pub private_key: String,

    /// Hash of the refresh token currently accepted for rotation
    pub refresh_token: String,

    /// Hashes of rotated refresh tokens
    pub refresh_tokens_used: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl KeyToken {
    /// Creates a fresh record with an empty history
    pub fn new(
        user_id: Uuid,
        public_key: String,
        private_key: String,
        refresh_token_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            public_key,
            private_key,
            refresh_token: refresh_token_hash,
            refresh_tokens_used: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the current hash into the history and installs `new_hash`
    ///
    /// The history keeps at most `history_limit` entries, evicting the oldest.
    pub fn rotate(&mut self, new_hash: String, history_limit: usize) {
        let previous = std::mem::replace(&mut self.refresh_token, new_hash);
        self.refresh_tokens_used.push(previous);
        let limit = history_limit.max(1);
        if self.refresh_tokens_used.len() > limit {
            let overflow = self.refresh_tokens_used.len() - limit;
            self.refresh_tokens_used.drain(..overflow);
        }
        self.updated_at = Utc::now();
    }

    /// Whether `token_hash` was already rotated out of this record
    pub fn has_used(&self, token_hash: &str) -> bool {
        self.refresh_tokens_used.iter().any(|h| h == token_hash)
    }

    /// Whether `token_hash` is the current refresh token
    pub fn is_current(&self, token_hash: &str) -> bool {
        self.refresh_token == token_hash
    }
}
