//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};

use crate::domain::entities::token::{Claims, KeyPair, TokenPair, TokenPayload, TokenType};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::key_pair;

/// Issues and verifies EdDSA token pairs
///
/// The service holds no key material; every call receives the shop's keys
/// from its key record.
#[derive(Debug, Clone)]
pub struct TokenService {
    config: TokenServiceConfig,
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new(TokenServiceConfig::default())
    }
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Generates a fresh key pair for a shop session
    pub fn generate_key_pair(&self) -> Result<KeyPair, DomainError> {
        key_pair::generate_key_pair()
    }

    /// Signs an access and a refresh token for `payload` with `keys`
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens and their lifetimes in seconds
    /// * `Err(DomainError)` - The private key could not be loaded or signing failed
    pub fn create_token_pair(
        &self,
        payload: &TokenPayload,
        keys: &KeyPair,
    ) -> Result<TokenPair, DomainError> {
        let encoding_key = EncodingKey::from_ed_pem(keys.private_key_pem.as_bytes())
            .map_err(|e| {
                tracing::error!("Failed to load signing key: {}", e);
                DomainError::Token(TokenError::TokenGenerationFailed)
            })?;

        let access_token = self.encode_jwt(
            &Claims::new(
                payload,
                TokenType::Access,
                self.config.access_token_expiry_seconds,
                &self.config.issuer,
                &self.config.audience,
            ),
            &encoding_key,
        )?;
        let refresh_token = self.encode_jwt(
            &Claims::new(
                payload,
                TokenType::Refresh,
                self.config.refresh_token_expiry_seconds,
                &self.config.issuer,
                &self.config.audience,
            ),
            &encoding_key,
        )?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_seconds,
            self.config.refresh_token_expiry_seconds,
        ))
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(
        &self,
        claims: &Claims,
        encoding_key: &EncodingKey,
    ) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::EdDSA), claims, encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token against a shop's public key
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT to verify
    /// * `public_key_pem` - SPKI PEM from the shop's key record
    /// * `expected` - The token type the caller requires
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature, expiry, issuer, audience and type all check out
    /// * `Err(TokenError)` - Expired, badly signed, wrong type, or malformed
    pub fn verify(
        &self,
        token: &str,
        public_key_pem: &str,
        expected: TokenType,
    ) -> Result<Claims, DomainError> {
        let decoding_key = DecodingKey::from_ed_pem(public_key_pem.as_bytes())
            .map_err(|_| DomainError::Token(TokenError::InvalidKey))?;

        let token_data = decode::<Claims>(token, &decoding_key, &self.validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                ErrorKind::ImmatureSignature
                | ErrorKind::InvalidIssuer
                | ErrorKind::InvalidAudience
                | ErrorKind::MissingRequiredClaim(_) => {
                    DomainError::Token(TokenError::InvalidClaims)
                }
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        if token_data.claims.token_type != expected {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }

        Ok(token_data.claims)
    }

    /// Hashes a token for storage and lookups
    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation.set_audience(&[self.config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation
    }
}
