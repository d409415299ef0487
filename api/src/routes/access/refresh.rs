use actix_web::{web, HttpResponse};
use validator::Validate;

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_shared::types::SuccessResponse;

use crate::dto::access::RefreshTokenRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /v1/api/shop/handler-refresh-token
///
/// Rotates the refresh token into a new token pair.
///
/// # Errors
/// - 401 Unauthorized: Unknown, expired or tampered refresh token
/// - 403 Forbidden: The token was already used; the session is now revoked
pub async fn refresh_token<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    request: web::Json<RefreshTokenRequest>,
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

    match state.access_service.refresh(&request.refresh_token).await {
        Ok(response) => HttpResponse::Ok().json(SuccessResponse::ok("Get token success!", response)),
        Err(error) => handle_domain_error(&error),
    }
}
