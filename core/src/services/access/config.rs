//! Configuration for the access service

use shop_shared::config::AuthConfig;

use crate::domain::entities::DEFAULT_USED_TOKEN_HISTORY_LIMIT;

/// Minimum accepted password length at sign-up
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Configuration for the access service
#[derive(Debug, Clone)]
pub struct AccessServiceConfig {
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Rotated refresh tokens remembered per key record
    pub used_token_history_limit: usize,
    /// Minimum password length
    pub min_password_length: usize,
}

impl Default for AccessServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            used_token_history_limit: DEFAULT_USED_TOKEN_HISTORY_LIMIT,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl From<&AuthConfig> for AccessServiceConfig {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: auth.bcrypt_cost,
            used_token_history_limit: auth.used_token_history_limit.max(1),
            ..Default::default()
        }
    }
}
