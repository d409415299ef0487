//! Product endpoints: creation, updates, publication and catalogue queries

pub mod create;
pub mod publish;
pub mod query;
pub mod update;

use actix_web::HttpResponse;
use uuid::Uuid;

use shop_core::errors::ProductError;

use crate::handlers::error::handle_domain_error;

/// Parse a product id path segment; malformed ids are reported as a
/// missing product
pub(crate) fn parse_product_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| handle_domain_error(&ProductError::ProductNotFound.into()))
}
