//! Access-token authentication middleware for protecting API endpoints.
//!
//! The client names itself with `x-client-id` (its shop id) and presents
//! the access token in `authorization`, either as `Bearer <token>` or bare.
//! The token is checked against that shop's current key by a
//! [`SessionVerifier`] registered as app data; on success the resolved
//! [`AuthContext`] is stored in the request extensions. Rejected requests
//! are answered with the JSON error envelope without reaching the handler.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
};
use uuid::Uuid;

use shop_core::domain::value_objects::AuthContext;
use shop_core::errors::{AuthError, DomainError};
use shop_core::repositories::{KeyTokenRepository, ShopRepository};
use shop_core::services::AccessService;

use crate::handlers::error::{handle_domain_error, ApiError};

pub const CLIENT_ID_HEADER: &str = "x-client-id";
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Resolves the identity behind an access token
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self, user_id: Uuid, access_token: &str) -> Result<AuthContext, DomainError>;
}

#[async_trait]
impl<S, K> SessionVerifier for AccessService<S, K>
where
    S: ShopRepository + 'static,
    K: KeyTokenRepository + 'static,
{
    async fn verify(&self, user_id: Uuid, access_token: &str) -> Result<AuthContext, DomainError> {
        self.authenticate(user_id, access_token).await
    }
}

/// Authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticationMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match resolve_identity(&req).await {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    let response = handle_domain_error(&error);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

async fn resolve_identity(req: &ServiceRequest) -> Result<AuthContext, DomainError> {
    let user_id = extract_client_id(req)?;
    let token = extract_access_token(req)?;

    let verifier = req
        .app_data::<web::Data<dyn SessionVerifier>>()
        .cloned()
        .ok_or_else(|| {
            log::error!("No session verifier registered");
            DomainError::internal("authentication is not configured")
        })?;

    verifier.verify(user_id, &token).await.map_err(|e| {
        log::warn!("Rejected access token for client {}: {}", user_id, e);
        e
    })
}

fn header_value<'a>(req: &'a ServiceRequest, name: &'static str) -> Result<&'a str, DomainError> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            AuthError::MissingCredentials {
                header: name.to_string(),
            }
            .into()
        })
}

fn extract_client_id(req: &ServiceRequest) -> Result<Uuid, DomainError> {
    let raw = header_value(req, CLIENT_ID_HEADER)?;
    Uuid::parse_str(raw).map_err(|_| AuthError::AuthenticationFailed.into())
}

/// Token from `authorization`, with or without the `Bearer ` prefix
fn extract_access_token(req: &ServiceRequest) -> Result<String, DomainError> {
    let raw = header_value(req, AUTHORIZATION_HEADER)?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredentials {
            header: AUTHORIZATION_HEADER.to_string(),
        }
        .into());
    }
    Ok(token.to_string())
}

/// Extractor for the identity set by [`Authentication`]
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthContext);

impl std::ops::Deref for Authenticated {
    type Target = AuthContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| ApiError(AuthError::AuthenticationFailed.into()).into());

        ready(result)
    }
}
