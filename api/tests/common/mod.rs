//! Shared wiring for the endpoint tests: the real application over the
//! in-memory repositories.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use serde_json::{json, Value};

use shop_api::middleware::SessionVerifier;
use shop_api::AppState;
use shop_core::repositories::{
    MockInventoryRepository, MockKeyTokenRepository, MockProductRepository, MockShopRepository,
};
use shop_core::services::{AccessService, AccessServiceConfig, ProductService, TokenService};
use shop_shared::config::{CorsConfig, ServerConfig};

pub type TestState = AppState<
    MockShopRepository,
    MockKeyTokenRepository,
    MockProductRepository,
    MockInventoryRepository,
>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub verifier: web::Data<dyn SessionVerifier>,
    pub cors: CorsConfig,
    pub max_payload_size: usize,
    pub shops: MockShopRepository,
    pub keys: MockKeyTokenRepository,
    pub products: MockProductRepository,
    pub inventories: MockInventoryRepository,
}

pub fn context() -> TestContext {
    let shops = MockShopRepository::new();
    let keys = MockKeyTokenRepository::new();
    let products = MockProductRepository::new();
    let inventories = MockInventoryRepository::new();

    let access_service = Arc::new(AccessService::new(
        Arc::new(shops.clone()),
        Arc::new(keys.clone()),
        Arc::new(TokenService::default()),
        AccessServiceConfig {
            bcrypt_cost: 4,
            ..Default::default()
        },
    ));
    let product_service = Arc::new(ProductService::new(
        Arc::new(products.clone()),
        Arc::new(inventories.clone()),
    ));

    let verifier: Arc<dyn SessionVerifier> = access_service.clone();
    TestContext {
        state: web::Data::new(AppState::new(access_service, product_service)),
        verifier: web::Data::from(verifier),
        cors: CorsConfig::development(),
        max_payload_size: ServerConfig::default().max_payload_size,
        shops,
        keys,
        products,
        inventories,
    }
}

/// Builds an initialised test service from a [`TestContext`]
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(shop_api::create_app(
            $ctx.state.clone(),
            $ctx.verifier.clone(),
            &$ctx.cors,
            $ctx.max_payload_size,
        ))
        .await
    };
}

pub fn signup_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "password": "secret-password",
    })
}

pub fn clothing_body(name: &str) -> Value {
    json!({
        "product_type": "Clothing",
        "product_name": name,
        "product_thumb": "thumb.png",
        "product_description": format!("{} made of cotton", name),
        "product_price": 25.5,
        "product_quantity": 8,
        "product_attributes": {
            "brand": "Acme",
            "size": "L",
            "material": "cotton"
        }
    })
}

/// Session of a signed-up shop as seen by a client
pub struct Session {
    pub shop_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl Session {
    pub fn from_signup(body: &Value) -> Self {
        let metadata = &body["metadata"];
        Self {
            shop_id: metadata["shop"]["id"].as_str().unwrap().to_string(),
            access_token: metadata["tokens"]["access_token"].as_str().unwrap().to_string(),
            refresh_token: metadata["tokens"]["refresh_token"].as_str().unwrap().to_string(),
        }
    }

    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("x-client-id", self.shop_id.clone()),
            ("authorization", format!("Bearer {}", self.access_token)),
        ]
    }
}
