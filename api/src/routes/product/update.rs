use actix_web::{web, HttpResponse};
use validator::Validate;

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_shared::types::SuccessResponse;

use crate::dto::product::UpdateProductRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::Authenticated;
use crate::routes::AppState;

use super::parse_product_id;

/// Handler for PATCH /v1/api/product/{product_id}
///
/// Partially updates one of the authenticated shop's products. Fields
/// left out of the body, or sent as `null`, keep their current value.
pub async fn update_product<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    auth: Authenticated,
    path: web::Path<String>,
    request: web::Json<UpdateProductRequest>,
) -> HttpResponse
where
    S: ShopRepository + 'static,
    K: KeyTokenRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    let product_id = match parse_product_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let (product_type, patch) = request.into_inner().into_patch();
    match state
        .product_service
        .update_product(&product_type, product_id, auth.user_id, patch)
        .await
    {
        Ok(product) => HttpResponse::Ok().json(SuccessResponse::ok("Update Product success!!", product)),
        Err(error) => handle_domain_error(&error),
    }
}
