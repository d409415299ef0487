//! Read-only product endpoints
//!
//! The shop listings need an authenticated shop. Search, the catalogue
//! list and product detail are public.

use actix_web::{web, HttpResponse};

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_shared::types::SuccessResponse;

use crate::dto::product::{ProductListQuery, ShopListQuery};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::Authenticated;
use crate::routes::AppState;

use super::parse_product_id;

/// Handler for GET /v1/api/product/drafts/all
pub async fn drafts_for_shop<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    auth: Authenticated,
    query: web::Query<ShopListQuery>,
) -> HttpResponse
where
    S: ShopRepository + 'static,
    K: KeyTokenRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state
        .product_service
        .find_all_drafts_for_shop(auth.user_id, query.pagination())
        .await
    {
        Ok(products) => HttpResponse::Ok().json(SuccessResponse::ok("Get list drafts success!!", products)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /v1/api/product/published/all
pub async fn published_for_shop<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    auth: Authenticated,
    query: web::Query<ShopListQuery>,
) -> HttpResponse
where
    S: ShopRepository + 'static,
    K: KeyTokenRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state
        .product_service
        .find_all_published_for_shop(auth.user_id, query.pagination())
        .await
    {
        Ok(products) => HttpResponse::Ok().json(SuccessResponse::ok("Get list publish success!!", products)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /v1/api/product/search/{key_search}
pub async fn search_products<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    path: web::Path<String>,
) -> HttpResponse
where
    S: ShopRepository + 'static,
    K: KeyTokenRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state.product_service.search_products(&path).await {
        Ok(products) => HttpResponse::Ok().json(SuccessResponse::ok("Get list search success!!", products)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /v1/api/product
///
/// Query: `limit` (default 50), `sort` (`ctime` for newest first, anything
/// else orders by id) and `page` (1-based).
pub async fn find_all_products<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    query: web::Query<ProductListQuery>,
) -> HttpResponse
where
    S: ShopRepository + 'static,
    K: KeyTokenRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state
        .product_service
        .find_all_products(query.sort(), query.pagination())
        .await
    {
        Ok(products) => HttpResponse::Ok().json(SuccessResponse::ok("findAllProducts success!!", products)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /v1/api/product/{product_id}
pub async fn find_product<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
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

    match state.product_service.find_product(product_id).await {
        Ok(product) => HttpResponse::Ok().json(SuccessResponse::ok("findProduct success!!", product)),
        Err(error) => handle_domain_error(&error),
    }
}
