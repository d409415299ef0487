#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{context, signup_body, Session};

#[actix_rt::test]
async fn test_signup_returns_created_with_tokens() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/signup")
        .set_json(signup_body("Shop A", "a@shop.dev"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 201);
    assert_eq!(body["message"], "Registered OK!");
    assert_eq!(body["metadata"]["shop"]["email"], "a@shop.dev");
    assert!(body["metadata"]["shop"].get("password_hash").is_none());
    assert!(body["metadata"]["tokens"]["access_token"].is_string());

    assert_eq!(ctx.shops.count().await, 1);
    assert_eq!(ctx.keys.count().await, 1);
}

#[actix_rt::test]
async fn test_duplicate_signup_conflicts() {
    let ctx = context();
    let app = init_app!(ctx);

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/v1/api/shop/signup")
            .set_json(signup_body("Shop A", "a@shop.dev"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
    assert_eq!(ctx.shops.count().await, 1);
}

#[actix_rt::test]
async fn test_signup_rejects_invalid_payload() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/signup")
        .set_json(json!({"name": "Shop", "email": "not-an-email", "password": "123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["email"].is_array());
    assert!(body["details"]["password"].is_array());
    assert_eq!(ctx.shops.count().await, 0);
}

#[actix_rt::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\":")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
}

#[actix_rt::test]
async fn test_oversized_body_is_rejected() {
    let mut ctx = context();
    ctx.max_payload_size = 256;
    let app = init_app!(ctx);

    let mut payload = signup_body("Shop", "big@shop.dev");
    payload["name"] = Value::String("x".repeat(1024));
    let req = test::TestRequest::post()
        .uri("/v1/api/shop/signup")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 413);
    assert_eq!(ctx.shops.count().await, 0);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/signup")
        .set_json(signup_body("Shop", "small@shop.dev"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_rt::test]
async fn test_login_statuses() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/signup")
        .set_json(signup_body("Shop A", "a@shop.dev"))
        .to_request();
    let signup: Value = test::call_and_read_body_json(&app, req).await;
    let first = Session::from_signup(&signup);
    let keys_before = ctx.keys.all().await;

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/login")
        .set_json(json!({"email": "a@shop.dev", "password": "wrong-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.keys.all().await, keys_before);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/login")
        .set_json(json!({"email": "nobody@shop.dev", "password": "secret-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/login")
        .set_json(json!({"email": "a@shop.dev", "password": "secret-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["metadata"]["shop"]["id"], first.shop_id.as_str());
    assert_ne!(body["metadata"]["tokens"]["refresh_token"], first.refresh_token.as_str());
    assert_eq!(ctx.keys.count().await, 1);
}

#[actix_rt::test]
async fn test_refresh_rotation_and_reuse_detection() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/signup")
        .set_json(signup_body("Shop A", "a@shop.dev"))
        .to_request();
    let signup: Value = test::call_and_read_body_json(&app, req).await;
    let session = Session::from_signup(&signup);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/handler-refresh-token")
        .set_json(json!({"refresh_token": session.refresh_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let rotated: Value = test::read_body_json(resp).await;
    let latest = rotated["metadata"]["tokens"]["refresh_token"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(rotated["metadata"]["user"]["email"], "a@shop.dev");

    // Replaying the first token revokes the session
    let req = test::TestRequest::post()
        .uri("/v1/api/shop/handler-refresh-token")
        .set_json(json!({"refresh_token": session.refresh_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(ctx.keys.count().await, 0);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/handler-refresh-token")
        .set_json(json!({"refresh_token": latest}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_unknown_refresh_token_is_unauthorized() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/signup")
        .set_json(signup_body("Shop A", "a@shop.dev"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/handler-refresh-token")
        .set_json(json!({"refresh_token": "not-a-token"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.keys.count().await, 1);
}

#[actix_rt::test]
async fn test_logout_requires_credentials() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/logout")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/signup")
        .set_json(signup_body("Shop A", "a@shop.dev"))
        .to_request();
    let signup: Value = test::call_and_read_body_json(&app, req).await;
    let session = Session::from_signup(&signup);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/logout")
        .insert_header(("x-client-id", session.shop_id.clone()))
        .insert_header(("authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.keys.count().await, 1);
}

#[actix_rt::test]
async fn test_logout_removes_session() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/api/shop/signup")
        .set_json(signup_body("Shop A", "a@shop.dev"))
        .to_request();
    let signup: Value = test::call_and_read_body_json(&app, req).await;
    let session = Session::from_signup(&signup);

    let mut req = test::TestRequest::post().uri("/v1/api/shop/logout");
    for header in session.headers() {
        req = req.insert_header(header);
    }
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["metadata"]["removed"], true);
    assert_eq!(ctx.keys.count().await, 0);

    // The session is gone, so the same access token no longer authenticates
    let mut req = test::TestRequest::post().uri("/v1/api/shop/logout");
    for header in session.headers() {
        req = req.insert_header(header);
    }
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_health_and_unknown_route() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/v1/api/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}
