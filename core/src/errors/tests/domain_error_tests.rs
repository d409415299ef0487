//! Unit tests for error classification and response conversion

use shop_shared::errors::IntoErrorResponse;

use crate::errors::{AuthError, DomainError, ErrorKind, ProductError, TokenError, ValidationError};

#[test]
fn test_access_error_kinds() {
    assert_eq!(
        DomainError::from(AuthError::ShopAlreadyRegistered).kind(),
        ErrorKind::Conflict
    );
    assert_eq!(
        DomainError::from(AuthError::ShopNotRegistered).kind(),
        ErrorKind::BadRequest
    );
    assert_eq!(
        DomainError::from(AuthError::AuthenticationFailed).kind(),
        ErrorKind::AuthFailure
    );
    assert_eq!(
        DomainError::from(AuthError::SessionNotFound).kind(),
        ErrorKind::AuthFailure
    );
    assert_eq!(
        DomainError::from(AuthError::RefreshTokenReused).kind(),
        ErrorKind::Forbidden
    );
}

#[test]
fn test_token_errors_surface_as_auth_failure() {
    for err in [
        TokenError::TokenExpired,
        TokenError::InvalidSignature,
        TokenError::InvalidClaims,
        TokenError::InvalidTokenFormat,
    ] {
        assert_eq!(DomainError::from(err).kind(), ErrorKind::AuthFailure);
    }
    assert_eq!(
        DomainError::from(TokenError::TokenGenerationFailed).kind(),
        ErrorKind::Internal
    );
}

#[test]
fn test_product_error_kinds() {
    let unknown = DomainError::from(ProductError::InvalidProductType {
        tag: "Bogus".to_string(),
    });
    assert_eq!(unknown.kind(), ErrorKind::BadRequest);
    assert_eq!(unknown.to_string(), "Invalid Product Types Bogus");

    assert_eq!(
        DomainError::from(ProductError::ProductNotFound).kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_status_codes() {
    assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    assert_eq!(ErrorKind::AuthFailure.status_code(), 401);
    assert_eq!(ErrorKind::Forbidden.status_code(), 403);
    assert_eq!(ErrorKind::NotFound.status_code(), 404);
    assert_eq!(ErrorKind::Conflict.status_code(), 409);
    assert_eq!(ErrorKind::Internal.status_code(), 500);
}

#[test]
fn test_error_response_conversion() {
    let response = DomainError::from(ValidationError::InvalidEmail).to_error_response();
    assert_eq!(response.error, "VALIDATION_ERROR");
    assert_eq!(response.status, 400);
    assert_eq!(response.message, "Invalid email");

    let response = DomainError::from(AuthError::RefreshTokenReused).to_error_response();
    assert_eq!(response.error, "FORBIDDEN");
    assert_eq!(response.status, 403);
}

#[test]
fn test_internal_error_hides_details() {
    let response = DomainError::internal("connection refused on 10.0.0.3").to_error_response();
    assert_eq!(response.status, 500);
    assert!(!response.message.contains("10.0.0.3"));
}
