use actix_web::{web, HttpResponse};
use validator::Validate;

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_shared::types::SuccessResponse;

use crate::dto::product::CreateProductRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::Authenticated;
use crate::routes::AppState;

/// Handler for POST /v1/api/product
///
/// Creates a draft product owned by the authenticated shop. The
/// `product_type` field selects how `product_attributes` is parsed.
///
/// # Errors
/// - 400 Bad Request: Unknown product type, invalid attributes or a failed insert
/// - 401 Unauthorized: Missing or invalid credentials
pub async fn create_product<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    auth: Authenticated,
    request: web::Json<CreateProductRequest>,
) -> HttpResponse
where
    S: ShopRepository + 'static,
    K: KeyTokenRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let (product_type, draft) = request.into_inner().into_draft(auth.user_id);
    match state.product_service.create_product(&product_type, draft).await {
        Ok(product) => HttpResponse::Created()
            .json(SuccessResponse::created("Create new Product success!!", product)),
        Err(error) => handle_domain_error(&error),
    }
}
