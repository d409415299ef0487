//! Application factory
//!
//! Builds the Actix-web application from already constructed services, so
//! the binary and the integration tests wire the same routes.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_shared::config::CorsConfig;
use shop_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::{create_cors, Authentication, SessionVerifier};
use crate::routes::access::{login::login, logout::logout, refresh::refresh_token, signup::signup};
use crate::routes::product::{
    create::create_product,
    publish::{publish_product, unpublish_product},
    query::{drafts_for_shop, find_all_products, find_product, published_for_shop, search_products},
    update::update_product,
};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
///
/// `max_payload_size` caps every JSON request body, in bytes.
pub fn create_app<S, K, P, I>(
    app_state: web::Data<AppState<S, K, P, I>>,
    verifier: web::Data<dyn SessionVerifier>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    S: ShopRepository + 'static,
    K: KeyTokenRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(verifier)
        .app_data(json_config(max_payload_size))
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/v1/api")
                .service(
                    web::scope("/shop")
                        .route("/signup", web::post().to(signup::<S, K, P, I>))
                        .route("/login", web::post().to(login::<S, K, P, I>))
                        .route(
                            "/handler-refresh-token",
                            web::post().to(refresh_token::<S, K, P, I>),
                        )
                        .route(
                            "/logout",
                            web::post().to(logout::<S, K, P, I>).wrap(Authentication),
                        ),
                )
                .service(
                    web::scope("/product")
                        .route(
                            "",
                            web::post().to(create_product::<S, K, P, I>).wrap(Authentication),
                        )
                        .route("", web::get().to(find_all_products::<S, K, P, I>))
                        .route(
                            "/drafts/all",
                            web::get().to(drafts_for_shop::<S, K, P, I>).wrap(Authentication),
                        )
                        .route(
                            "/published/all",
                            web::get()
                                .to(published_for_shop::<S, K, P, I>)
                                .wrap(Authentication),
                        )
                        .route(
                            "/search/{key_search}",
                            web::get().to(search_products::<S, K, P, I>),
                        )
                        .route(
                            "/publish/{id}",
                            web::post().to(publish_product::<S, K, P, I>).wrap(Authentication),
                        )
                        .route(
                            "/unpublish/{id}",
                            web::post()
                                .to(unpublish_product::<S, K, P, I>)
                                .wrap(Authentication),
                        )
                        .route(
                            "/{product_id}",
                            web::patch().to(update_product::<S, K, P, I>).wrap(Authentication),
                        )
                        .route("/{product_id}", web::get().to(find_product::<S, K, P, I>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Malformed or oversized JSON bodies get the same error envelope as everything else
fn json_config(max_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(|err, _req| {
            let message = err.to_string();
            log::debug!("Rejected request body: {}", message);
            let response = match err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    HttpResponse::PayloadTooLarge().json(ErrorResponse::new(
                        error_codes::PAYLOAD_TOO_LARGE,
                        message,
                        413,
                    ))
                }
                _ => HttpResponse::BadRequest().json(ErrorResponse::new(
                    error_codes::BAD_REQUEST,
                    message,
                    400,
                )),
            };
            InternalError::from_response(err, response).into()
        })
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "shop-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
        404,
    ))
}
