use actix_web::{web, HttpResponse};
use validator::Validate;

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_shared::types::SuccessResponse;

use crate::dto::access::LoginRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /v1/api/shop/login
///
/// Opens a new session, replacing any previous one of the shop.
///
/// # Errors
/// - 400 Bad Request: Shop not registered
/// - 401 Unauthorized: Wrong password
pub async fn login<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    request: web::Json<LoginRequest>,
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

    match state
        .access_service
        .login(
            &request.email,
            &request.password,
            request.refresh_token.as_deref(),
        )
        .await
    {
        Ok(response) => HttpResponse::Ok().json(SuccessResponse::ok("Login success!", response)),
        Err(error) => handle_domain_error(&error),
    }
}
