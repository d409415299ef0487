mod factory_tests;

use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::value_objects::ProductDraft;
use crate::repositories::{MockInventoryRepository, MockProductRepository};

use super::ProductService;

pub(super) struct Fixture {
    pub service: ProductService<MockProductRepository, MockInventoryRepository>,
    pub products: MockProductRepository,
    pub inventories: MockInventoryRepository,
}

pub(super) fn fixture() -> Fixture {
    let products = MockProductRepository::new();
    let inventories = MockInventoryRepository::new();
    let service = ProductService::new(Arc::new(products.clone()), Arc::new(inventories.clone()));
    Fixture {
        service,
        products,
        inventories,
    }
}

pub(super) fn clothing_draft(shop_id: Uuid, name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        thumb: "thumb.png".to_string(),
        description: Some(format!("{} for every season", name)),
        price: 19.99,
        quantity: 12,
        shop_id,
        attributes: json!({"brand": "Acme", "size": "M", "material": "cotton"}),
        variations: vec![],
    }
}
