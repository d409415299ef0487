//! Unit tests for product creation through the factory

use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::product::{ProductAttributes, ProductType, DEFAULT_RATINGS_AVERAGE};
use crate::errors::{DomainError, ErrorKind, ProductError, ValidationError};
use crate::repositories::{
    InventoryRepository, MockInventoryRepository, MockProductRepository, ProductRepository,
};
use crate::services::product::ProductFactory;

use super::{clothing_draft, fixture};

#[tokio::test]
async fn test_create_clothing_writes_attributes_product_and_inventory() {
    let f = fixture();
    let shop_id = Uuid::new_v4();

    let product = f
        .service
        .create_product("Clothing", clothing_draft(shop_id, "Summer Tee"))
        .await
        .unwrap();

    assert_eq!(product.product_type, ProductType::Clothing);
    assert_eq!(product.slug, "summer-tee");
    assert_eq!(product.ratings_average, DEFAULT_RATINGS_AVERAGE);
    assert!(product.is_draft);
    assert!(!product.is_published);

    // Same id links the base product to its type record
    let record = f
        .products
        .find_attributes(ProductType::Clothing, product.attributes_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.shop_id, shop_id);
    match &record.attributes {
        ProductAttributes::Clothing(attrs) => {
            assert_eq!(attrs.brand, "Acme");
            assert_eq!(attrs.size.as_deref(), Some("M"));
        }
        other => panic!("unexpected attributes: {:?}", other),
    }

    let stored = f.products.find_by_id(product.id).await.unwrap().unwrap();
    assert_eq!(stored.attributes, record.attributes);

    let inventory = f
        .inventories
        .find_by_product(product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(inventory.stock, 12);
    assert_eq!(inventory.shop_id, shop_id);
    assert_eq!(inventory.location, "unKnowned");
}

#[tokio::test]
async fn test_create_electronics_and_furniture() {
    let f = fixture();
    let shop_id = Uuid::new_v4();

    let mut draft = clothing_draft(shop_id, "Phone");
    draft.attributes = json!({"manufacturer": "Apple", "model": "X", "color": "black"});
    let phone = f.service.create_product("Electronics", draft).await.unwrap();
    assert_eq!(phone.product_type, ProductType::Electronics);

    let mut draft = clothing_draft(shop_id, "Desk");
    draft.attributes = json!({"brand": "Oak & Co"});
    let desk = f.service.create_product("Furniture", draft).await.unwrap();
    assert_eq!(desk.product_type, ProductType::Furniture);

    assert_eq!(f.products.attribute_count().await, 2);
    assert_eq!(f.products.product_count().await, 2);
    assert_eq!(f.inventories.count(), 2);
}

#[tokio::test]
async fn test_unknown_type_is_bad_request_and_stores_nothing() {
    let f = fixture();
    let err = f
        .service
        .create_product("Bogus", clothing_draft(Uuid::new_v4(), "Tee"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(err.to_string(), "Invalid Product Types Bogus");
    assert_eq!(f.products.attribute_count().await, 0);
    assert_eq!(f.products.product_count().await, 0);
    assert_eq!(f.inventories.count(), 0);
}

#[tokio::test]
async fn test_unregistered_type_is_rejected() {
    let products = MockProductRepository::new();
    let mut factory = ProductFactory::empty(
        Arc::new(products.clone()),
        Arc::new(MockInventoryRepository::new()),
    );
    factory.register(ProductType::Clothing, |value| {
        ProductAttributes::from_value(ProductType::Clothing, value)
    });
    assert!(factory.is_registered(ProductType::Clothing));
    assert!(!factory.is_registered(ProductType::Furniture));

    let mut draft = clothing_draft(Uuid::new_v4(), "Chair");
    draft.attributes = json!({"brand": "Oak"});
    let err = factory.create_product("Furniture", draft).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::MissingHandler { ref product_type }) if product_type == "Furniture"
    ));
    assert_eq!(products.attribute_count().await, 0);
}

#[tokio::test]
async fn test_handler_returning_other_type_is_mismatch() {
    let products = MockProductRepository::new();
    let mut factory = ProductFactory::new(
        Arc::new(products.clone()),
        Arc::new(MockInventoryRepository::new()),
    );
    factory.register(ProductType::Furniture, |value| {
        ProductAttributes::from_value(ProductType::Clothing, value)
    });

    let err = factory
        .create_product("Furniture", clothing_draft(Uuid::new_v4(), "Chair"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::AttributeTypeMismatch { .. })
    ));
    assert_eq!(products.attribute_count().await, 0);
}

#[tokio::test]
async fn test_invalid_payloads_are_rejected_before_writing() {
    let f = fixture();
    let shop_id = Uuid::new_v4();

    let mut missing_brand = clothing_draft(shop_id, "Tee");
    missing_brand.attributes = json!({"size": "L"});
    let err = f
        .service
        .create_product("Clothing", missing_brand)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::InvalidAttributes { .. })
    ));

    let mut nameless = clothing_draft(shop_id, "Tee");
    nameless.name = "  ".to_string();
    let err = f.service.create_product("Clothing", nameless).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { ref field }) if field == "name"
    ));

    let mut negative = clothing_draft(shop_id, "Tee");
    negative.price = -1.0;
    let err = f.service.create_product("Clothing", negative).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);

    assert_eq!(f.products.attribute_count().await, 0);
}

#[tokio::test]
async fn test_attribute_insert_failure_names_the_type() {
    let f = fixture();
    f.products.fail_attribute_inserts(true);

    let err = f
        .service
        .create_product("Clothing", clothing_draft(Uuid::new_v4(), "Tee"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "create new Clothing error");
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(f.products.product_count().await, 0);
}

#[tokio::test]
async fn test_product_insert_failure_removes_attribute_record() {
    let f = fixture();
    f.products.fail_product_inserts(true);

    let err = f
        .service
        .create_product("Clothing", clothing_draft(Uuid::new_v4(), "Tee"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::CreateFailed { ref stage }) if stage == "Product"
    ));
    assert_eq!(f.products.attribute_count().await, 0);
    assert_eq!(f.inventories.count(), 0);
}

#[tokio::test]
async fn test_inventory_failure_leaves_nothing_behind() {
    let f = fixture();
    f.inventories.fail_inserts(true);

    let err = f
        .service
        .create_product("Clothing", clothing_draft(Uuid::new_v4(), "Tee"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::CreateFailed { ref stage }) if stage == "Inventory"
    ));
    assert_eq!(f.products.attribute_count().await, 0);
    assert_eq!(f.products.product_count().await, 0);
}
