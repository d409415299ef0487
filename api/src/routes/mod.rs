//! Route handlers, grouped by resource

pub mod access;
pub mod product;

use std::sync::Arc;

use shop_core::repositories::{
    InventoryRepository, KeyTokenRepository, ProductRepository, ShopRepository,
};
use shop_core::services::{AccessService, ProductService};

/// Application state shared by all handlers
pub struct AppState<S, K, P, I>
where
    S: ShopRepository,
    K: KeyTokenRepository,
    P: ProductRepository,
    I: InventoryRepository,
{
    pub access_service: Arc<AccessService<S, K>>,
    pub product_service: Arc<ProductService<P, I>>,
}

impl<S, K, P, I> AppState<S, K, P, I>
where
    S: ShopRepository,
    K: KeyTokenRepository,
    P: ProductRepository,
    I: InventoryRepository,
{
    pub fn new(
        access_service: Arc<AccessService<S, K>>,
        product_service: Arc<ProductService<P, I>>,
    ) -> Self {
        Self {
            access_service,
            product_service,
        }
    }
}
