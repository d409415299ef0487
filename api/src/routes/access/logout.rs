use actix_web::{web, HttpResponse};

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_shared::types::SuccessResponse;

use crate::dto::access::LogoutResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::Authenticated;
use crate::routes::AppState;

/// Handler for POST /v1/api/shop/logout
///
/// Deletes the key record behind the authenticated session. Requires the
/// authentication middleware.
pub async fn logout<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    auth: Authenticated,
) -> HttpResponse
where
    S: ShopRepository + 'static,
    K: KeyTokenRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state.access_service.logout(auth.key_token_id).await {
        Ok(removed) => {
            HttpResponse::Ok().json(SuccessResponse::ok("Logout success!", LogoutResponse { removed }))
        }
        Err(error) => handle_domain_error(&error),
    }
}
