use actix_web::{web, HttpResponse};

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_shared::types::SuccessResponse;

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::Authenticated;
use crate::routes::AppState;

use super::parse_product_id;

/// Handler for POST /v1/api/product/publish/{id}
///
/// `metadata` is `true` when the product changed state and `false` when
/// it was already published.
pub async fn publish_product<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    auth: Authenticated,
    path: web::Path<String>,
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

    match state
        .product_service
        .publish_product(auth.user_id, product_id)
        .await
    {
        Ok(changed) => {
            HttpResponse::Ok().json(SuccessResponse::ok("publishProductByShop success!!", changed))
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /v1/api/product/unpublish/{id}
pub async fn unpublish_product<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    auth: Authenticated,
    path: web::Path<String>,
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

    match state
        .product_service
        .unpublish_product(auth.user_id, product_id)
        .await
    {
        Ok(changed) => {
            HttpResponse::Ok().json(SuccessResponse::ok("unPublishProductByShop success!!", changed))
        }
        Err(error) => handle_domain_error(&error),
    }
}
