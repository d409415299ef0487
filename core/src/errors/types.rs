//! Domain-specific error types for access, token, validation and product
//! operations.

use thiserror::Error;

/// Access-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Error: Shop already registered!")]
    ShopAlreadyRegistered,

    #[error("Shop not registered!")]
    ShopNotRegistered,

    #[error("Authentication error")]
    AuthenticationFailed,

    /// The presented refresh token is not the current token of any session
    #[error("Shop not registered!")]
    SessionNotFound,

    /// A rotated refresh token was presented again
    #[error("Something wrong happened!! Please re-login")]
    RefreshTokenReused,

    #[error("Invalid request: missing {header}")]
    MissingCredentials { header: String },

    #[error("Key pair generation failed")]
    KeyGenerationFailed,

    #[error("Password hashing failed")]
    PasswordHashingFailed,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Invalid key material")]
    InvalidKey,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Invalid length: {field} (min: {min}, actual: {actual})")]
    InvalidLength {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Invalid email")]
    InvalidEmail,
}

/// Product catalogue errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("Invalid Product Types {tag}")]
    InvalidProductType { tag: String },

    #[error("No handler registered for product type {product_type}")]
    MissingHandler { product_type: String },

    #[error("Invalid product attributes: {reason}")]
    InvalidAttributes { reason: String },

    #[error("Attributes of type {actual} cannot be applied to a {expected} product")]
    AttributeTypeMismatch { expected: String, actual: String },

    /// One of the creation steps failed; `stage` names the record
    #[error("create new {stage} error")]
    CreateFailed { stage: String },

    #[error("Product not found")]
    ProductNotFound,
}
