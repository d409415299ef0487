//! Access-flow response value objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::shop::Shop;
use crate::domain::entities::token::{TokenPair, TokenPayload};

/// Public view of a shop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&Shop> for ShopInfo {
    fn from(shop: &Shop) -> Self {
        Self {
            id: shop.id,
            name: shop.name.clone(),
            email: shop.email.clone(),
        }
    }
}

/// Returned by sign-up and login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub shop: ShopInfo,
    pub tokens: TokenPair,
}

impl AuthResponse {
    pub fn new(shop: &Shop, tokens: TokenPair) -> Self {
        Self {
            shop: ShopInfo::from(shop),
            tokens,
        }
    }
}

/// Returned by a successful refresh rotation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub user: TokenPayload,
    pub tokens: TokenPair,
}

/// Identity of an authenticated request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthContext {
    /// Authenticated shop
    pub user_id: Uuid,

    /// Email carried in the access token
    pub email: String,

    /// Key record backing the session, used by logout
    pub key_token_id: Uuid,
}
