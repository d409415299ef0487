//! Main access service implementation

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use shop_shared::utils::validation::{is_valid_email, normalize_email};

use crate::domain::entities::key_token::KeyToken;
use crate::domain::entities::shop::Shop;
use crate::domain::entities::token::{KeyPair, TokenPair, TokenPayload, TokenType};
use crate::domain::value_objects::{AuthContext, AuthResponse, RefreshResponse};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::{KeyTokenRepository, ShopRepository};
use crate::services::token::TokenService;

use super::config::AccessServiceConfig;
use super::password::{hash_password, verify_password};

/// Access service driving the shop session lifecycle
///
/// A session moves `ISSUED -> ROTATED -> (ROTATED | REVOKED)`. Each refresh
/// rotates the key record's current refresh token; presenting a rotated
/// token again revokes the whole session.
pub struct AccessService<S, K>
where
    S: ShopRepository,
    K: KeyTokenRepository,
{
    /// Shop credential store
    shop_repository: Arc<S>,
    /// Key and refresh-token store
    key_token_repository: Arc<K>,
    /// Token issuing and verification
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AccessServiceConfig,
}

impl<S, K> AccessService<S, K>
where
    S: ShopRepository,
    K: KeyTokenRepository,
{
    /// Create a new access service
    pub fn new(
        shop_repository: Arc<S>,
        key_token_repository: Arc<K>,
        token_service: Arc<TokenService>,
        config: AccessServiceConfig,
    ) -> Self {
        Self {
            shop_repository,
            key_token_repository,
            token_service,
            config,
        }
    }

    /// Register a new shop and open its first session
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The public shop fields and the initial token pair
    /// * `Err(DomainError)` - Invalid input (`BadRequest`) or a taken email (`Conflict`)
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        let email = self.validate_email(email)?;
        let password_len = password.chars().count();
        if password_len < self.config.min_password_length {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: self.config.min_password_length,
                actual: password_len,
            }
            .into());
        }

        if self.shop_repository.find_by_email(&email).await?.is_some() {
            debug!("Sign-up rejected, email already registered");
            return Err(AuthError::ShopAlreadyRegistered.into());
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        let shop = self
            .shop_repository
            .create(Shop::new(name.to_string(), email, password_hash))
            .await?;

        let tokens = self.open_session(&shop).await?;
        info!(shop_id = %shop.id, "Shop registered");

        Ok(AuthResponse::new(&shop, tokens))
    }

    /// Authenticate with email and password and open a fresh session
    ///
    /// Any previous session of the shop is replaced, including its used
    /// refresh-token history. The optional refresh token is accepted for
    /// client compatibility and not consulted.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        _refresh_token: Option<&str>,
    ) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);
        let shop = self
            .shop_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::ShopNotRegistered)?;

        if !verify_password(password, &shop.password_hash).await? {
            warn!(shop_id = %shop.id, "Login failed, password mismatch");
            return Err(AuthError::AuthenticationFailed.into());
        }

        let tokens = self.open_session(&shop).await?;
        info!(shop_id = %shop.id, "Shop logged in");

        Ok(AuthResponse::new(&shop, tokens))
    }

    /// Close a session by key record id
    ///
    /// Succeeds whether or not the record still exists.
    pub async fn logout(&self, key_token_id: Uuid) -> DomainResult<bool> {
        let deleted = self.key_token_repository.delete_by_id(key_token_id).await?;
        if deleted {
            info!(key_token_id = %key_token_id, "Session closed");
        } else {
            debug!(key_token_id = %key_token_id, "Logout for unknown session");
        }
        Ok(deleted)
    }

    /// Rotate a refresh token into a new token pair
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshResponse)` - The new token pair; the presented token is now used
    /// * `Err(AuthError::RefreshTokenReused)` - The token was already rotated; the
    ///   session is deleted (`Forbidden`)
    /// * `Err(AuthError::SessionNotFound)` - No session holds this token (`AuthFailure`)
    /// * `Err(TokenError)` - Signature, expiry or claims are invalid (`AuthFailure`)
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<RefreshResponse> {
        let token_hash = self.token_service.hash_token(refresh_token);

        if let Some(record) = self
            .key_token_repository
            .find_by_used_refresh_token(&token_hash)
            .await?
        {
            warn!(shop_id = %record.user_id, "Refresh token reuse detected, revoking session");
            self.revoke(record.user_id).await?;
            return Err(AuthError::RefreshTokenReused.into());
        }

        // Unknown tokens fail without touching any session
        let record = self
            .key_token_repository
            .find_by_refresh_token(&token_hash)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        let claims = self
            .token_service
            .verify(refresh_token, &record.public_key, TokenType::Refresh)?;
        let claimed_user = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        if claimed_user != record.user_id {
            warn!(shop_id = %record.user_id, "Refresh token subject does not match its session");
            return Err(TokenError::InvalidClaims.into());
        }

        let shop = self
            .shop_repository
            .find_by_email(&claims.email)
            .await?
            .filter(|shop| shop.id == record.user_id)
            .ok_or(AuthError::SessionNotFound)?;

        let payload = TokenPayload::new(shop.id, shop.email.clone());
        let keys = KeyPair {
            private_key_pem: record.private_key.clone(),
            public_key_pem: record.public_key.clone(),
        };
        let tokens = self.token_service.create_token_pair(&payload, &keys)?;
        let new_hash = self.token_service.hash_token(&tokens.refresh_token);

        let rotated = self
            .key_token_repository
            .rotate_refresh_token(
                record.id,
                &token_hash,
                &new_hash,
                self.config.used_token_history_limit,
            )
            .await?;
        if !rotated {
            // A concurrent refresh already consumed this token
            warn!(shop_id = %record.user_id, "Concurrent refresh on the same token, revoking session");
            self.revoke(record.user_id).await?;
            return Err(AuthError::RefreshTokenReused.into());
        }

        debug!(shop_id = %shop.id, "Refresh token rotated");
        Ok(RefreshResponse {
            user: payload,
            tokens,
        })
    }

    /// Resolve the identity behind an access token
    ///
    /// `user_id` is the shop id the client claims (the `x-client-id`
    /// header); the token must be signed by that shop's current key.
    pub async fn authenticate(&self, user_id: Uuid, access_token: &str) -> DomainResult<AuthContext> {
        let record = self
            .key_token_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let claims = self
            .token_service
            .verify(access_token, &record.public_key, TokenType::Access)?;
        if claims.user_id().ok() != Some(user_id) {
            return Err(TokenError::InvalidClaims.into());
        }

        Ok(AuthContext {
            user_id,
            email: claims.email,
            key_token_id: record.id,
        })
    }

    fn validate_email(&self, email: &str) -> DomainResult<String> {
        if email.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        Ok(normalize_email(email))
    }

    /// Issue a fresh key pair and token pair and store them as the shop's
    /// only session
    async fn open_session(&self, shop: &Shop) -> DomainResult<TokenPair> {
        let keys = self.token_service.generate_key_pair()?;
        let payload = TokenPayload::new(shop.id, shop.email.clone());
        let tokens = self.token_service.create_token_pair(&payload, &keys)?;

        self.key_token_repository
            .upsert(KeyToken::new(
                shop.id,
                keys.public_key_pem,
                keys.private_key_pem,
                self.token_service.hash_token(&tokens.refresh_token),
            ))
            .await?;

        Ok(tokens)
    }

    async fn revoke(&self, user_id: Uuid) -> DomainResult<()> {
        let removed = self.key_token_repository.delete_by_user_id(user_id).await?;
        info!(shop_id = %user_id, removed, "Session revoked");
        Ok(())
    }
}
