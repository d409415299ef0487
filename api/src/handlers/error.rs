//! Conversion of domain and validation failures into JSON error responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use shop_core::errors::DomainError;
use shop_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use std::collections::HashMap;
use validator::ValidationErrors;

/// Render a domain error with the status of its kind
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let response = error.to_error_response();
    if response.status >= 500 {
        log::error!("Request failed: {}", error);
    } else {
        log::debug!("Request rejected: {}", error);
    }
    HttpResponse::build(status_of(response.status)).json(response)
}

/// Render request validation failures as a 400 with per-field messages
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    HttpResponse::BadRequest().json(ErrorResponse::with_details(
        error_codes::VALIDATION_ERROR,
        "Request validation failed",
        400,
        details,
    ))
}

fn status_of(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Domain error carried through actix's error type, e.g. out of middleware
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_of(self.0.kind().status_code())
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}
