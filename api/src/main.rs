use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use shop_api::config::Config;
use shop_api::middleware::SessionVerifier;
use shop_api::{create_app, AppState};
use shop_core::services::{
    AccessService, AccessServiceConfig, ProductService, TokenService, TokenServiceConfig,
};
use shop_infra::{
    DatabasePool, MySqlInventoryRepository, MySqlKeyTokenRepository, MySqlProductRepository,
    MySqlShopRepository,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));
    info!("Starting ShopDev API Server ({:?})", config.environment);

    let mut database = config.database.clone();
    database.enable_logging = database.enable_logging || config.logging.log_statements;
    let pool = DatabasePool::new(database)
        .await
        .context("failed to connect to the database")?;
    pool.run_migrations()
        .await
        .context("failed to run database migrations")?;

    let db = pool.get_pool().clone();
    let shop_repository = Arc::new(MySqlShopRepository::new(db.clone()));
    let key_token_repository = Arc::new(MySqlKeyTokenRepository::new(db.clone()));
    let product_repository = Arc::new(MySqlProductRepository::new(db.clone()));
    let inventory_repository = Arc::new(MySqlInventoryRepository::new(db));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let access_service = Arc::new(AccessService::new(
        shop_repository,
        key_token_repository,
        token_service,
        AccessServiceConfig::from(&config.auth),
    ));
    let product_service = Arc::new(ProductService::new(product_repository, inventory_repository));

    let verifier: Arc<dyn SessionVerifier> = access_service.clone();
    let verifier = web::Data::from(verifier);
    let app_state = web::Data::new(AppState::new(access_service, product_service));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), verifier.clone(), &cors, max_payload_size)
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
