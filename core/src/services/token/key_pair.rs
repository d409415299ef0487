//! Ed25519 key pair generation for per-shop token signing

use ed25519_dalek::pkcs8::spki::der::pem::LineEnding;
use ed25519_dalek::pkcs8::{EncodePrivateKey, EncodePublicKey};
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;

use crate::domain::entities::token::KeyPair;
use crate::errors::{AuthError, DomainError};

/// Generates a fresh Ed25519 key pair encoded as PEM
///
/// The private key is PKCS#8 and the public key SPKI, the forms
/// `jsonwebtoken` loads for EdDSA.
pub fn generate_key_pair() -> Result<KeyPair, DomainError> {
    let signing_key = SigningKey::generate(&mut OsRng);

    let private_key_pem = signing_key
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| {
            tracing::error!("Failed to encode private key: {}", e);
            DomainError::Auth(AuthError::KeyGenerationFailed)
        })?
        .as_str()
        .to_owned();

    let public_key_pem = signing_key
        .verifying_key()
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| {
            tracing::error!("Failed to encode public key: {}", e);
            DomainError::Auth(AuthError::KeyGenerationFailed)
        })?;

    Ok(KeyPair {
        private_key_pem,
        public_key_pem,
    })
}
