//! Unit tests for product entities

use serde_json::json;

use crate::domain::entities::product::{normalize_rating, ProductAttributes, ProductType};
use crate::errors::ProductError;

#[test]
fn test_product_type_from_tag() {
    assert_eq!("Clothing".parse::<ProductType>().unwrap(), ProductType::Clothing);
    assert_eq!("Electronics".parse::<ProductType>().unwrap(), ProductType::Electronics);
    assert_eq!("Furniture".parse::<ProductType>().unwrap(), ProductType::Furniture);

    let err = "clothing".parse::<ProductType>().unwrap_err();
    assert_eq!(
        err,
        ProductError::InvalidProductType {
            tag: "clothing".to_string()
        }
    );
}

#[test]
fn test_parse_clothing_attributes() {
    let attrs = ProductAttributes::from_value(
        ProductType::Clothing,
        json!({"brand": "Levi's", "size": "M", "material": "denim"}),
    )
    .unwrap();

    assert_eq!(attrs.product_type(), ProductType::Clothing);
    assert_eq!(attrs.to_value()["brand"], "Levi's");
}

#[test]
fn test_parse_rejects_missing_required_field() {
    let err = ProductAttributes::from_value(ProductType::Electronics, json!({"model": "X1"}))
        .unwrap_err();
    assert!(matches!(err, ProductError::InvalidAttributes { .. }));
}

#[test]
fn test_parse_rejects_non_object() {
    let err = ProductAttributes::from_value(ProductType::Furniture, json!("sofa")).unwrap_err();
    assert!(matches!(err, ProductError::InvalidAttributes { .. }));
}

#[test]
fn test_merge_skips_nulls() {
    let attrs = ProductAttributes::from_value(
        ProductType::Electronics,
        json!({"manufacturer": "Apple", "model": "M1", "color": "silver"}),
    )
    .unwrap();

    let merged = attrs
        .merge(&json!({"color": "black", "model": null}))
        .unwrap();

    let value = merged.to_value();
    assert_eq!(value["manufacturer"], "Apple");
    assert_eq!(value["model"], "M1");
    assert_eq!(value["color"], "black");
}

#[test]
fn test_untagged_serialization() {
    let attrs = ProductAttributes::from_value(ProductType::Furniture, json!({"brand": "Ikea"}))
        .unwrap();
    let value = serde_json::to_value(&attrs).unwrap();
    assert_eq!(value, json!({"brand": "Ikea", "size": null, "material": null}));
}

#[test]
fn test_normalize_rating() {
    assert_eq!(normalize_rating(4.46), 4.5);
    assert_eq!(normalize_rating(0.2), 1.0);
    assert_eq!(normalize_rating(7.0), 5.0);
}
