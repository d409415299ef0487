//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, ProductError, TokenError, ValidationError};

use shop_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Coarse error classification surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    AuthFailure,
    Forbidden,
    Conflict,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::AuthFailure => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    Product(#[from] ProductError),
}

impl DomainError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } | DomainError::BadRequest { .. } => ErrorKind::BadRequest,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Unauthorized => ErrorKind::AuthFailure,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(err) => match err {
                AuthError::ShopAlreadyRegistered => ErrorKind::Conflict,
                AuthError::ShopNotRegistered => ErrorKind::BadRequest,
                AuthError::RefreshTokenReused => ErrorKind::Forbidden,
                AuthError::AuthenticationFailed
                | AuthError::SessionNotFound
                | AuthError::MissingCredentials { .. } => ErrorKind::AuthFailure,
                AuthError::KeyGenerationFailed | AuthError::PasswordHashingFailed => {
                    ErrorKind::Internal
                }
            },
            DomainError::Token(err) => match err {
                TokenError::TokenGenerationFailed => ErrorKind::Internal,
                _ => ErrorKind::AuthFailure,
            },
            DomainError::ValidationErr(_) => ErrorKind::BadRequest,
            DomainError::Product(err) => match err {
                ProductError::ProductNotFound => ErrorKind::NotFound,
                _ => ErrorKind::BadRequest,
            },
        }
    }

    /// Stable error code for clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                error_codes::VALIDATION_ERROR
            }
            DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
            DomainError::Token(TokenError::TokenGenerationFailed) => error_codes::INTERNAL_ERROR,
            DomainError::Token(_) => error_codes::TOKEN_INVALID,
            DomainError::Internal { .. } => error_codes::DATABASE_ERROR,
            _ => match self.kind() {
                ErrorKind::BadRequest => error_codes::BAD_REQUEST,
                ErrorKind::AuthFailure => error_codes::AUTH_FAILURE,
                ErrorKind::Forbidden => error_codes::FORBIDDEN,
                ErrorKind::Conflict => error_codes::CONFLICT,
                ErrorKind::NotFound => error_codes::NOT_FOUND,
                ErrorKind::Internal => error_codes::INTERNAL_ERROR,
            },
        }
    }

    /// Shorthand for storage failures
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        let kind = self.kind();
        // Storage details stay in the logs
        let message = match kind {
            ErrorKind::Internal => "Internal server error".to_string(),
            _ => self.to_string(),
        };
        ErrorResponse::new(self.error_code(), message, kind.status_code())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
