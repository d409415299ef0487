use actix_web::{web, HttpResponse};
use validator::Validate;

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_shared::types::SuccessResponse;

use crate::dto::access::SignUpRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /v1/api/shop/signup
///
/// Registers a shop and returns its public fields with the first token pair.
///
/// # Errors
/// - 400 Bad Request: Invalid name, email or password
/// - 409 Conflict: Email already registered
pub async fn signup<S, K, P, I>(
    state: web::Data<AppState<S, K, P, I>>,
    request: web::Json<SignUpRequest>,
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
        .sign_up(&request.name, &request.email, &request.password)
        .await
    {
        Ok(response) => {
            log::info!("Shop {} signed up", response.shop.id);
            HttpResponse::Created().json(SuccessResponse::created("Registered OK!", response))
        }
        Err(error) => handle_domain_error(&error),
    }
}
