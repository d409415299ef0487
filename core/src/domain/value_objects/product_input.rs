//! Inputs and projections for product operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use shop_shared::types::Pagination;

use crate::errors::ValidationError;

/// Payload for creating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub thumb: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: u32,
    /// Owning shop, taken from the authenticated identity
    pub shop_id: Uuid,
    /// Type-specific attributes, parsed by the factory handler
    pub attributes: Value,
    #[serde(default)]
    pub variations: Vec<Value>,
}

impl ProductDraft {
    /// Checks the base fields common to every product type
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            });
        }
        if self.thumb.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "thumb".to_string(),
            });
        }
        validate_price(self.price)
    }
}

/// Partial update of a product; absent or null fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub variations: Option<Vec<Value>>,
    #[serde(default)]
    pub attributes: Option<Value>,
}

impl ProductPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::RequiredField {
                    field: "name".to_string(),
                });
            }
        }
        match self.price {
            Some(price) => validate_price(price),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.thumb.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.variations.is_none()
            && self.attributes.is_none()
    }
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "0".to_string(),
            max: "inf".to_string(),
        });
    }
    Ok(())
}

/// Listing projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub thumb: String,
}

/// Ordering for the public product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductSort {
    /// Newest first (`ctime`)
    #[default]
    Newest,
    /// By id
    Id,
}

impl ProductSort {
    /// `"ctime"` sorts newest first; anything else sorts by id
    pub fn from_param(param: &str) -> Self {
        if param == "ctime" {
            ProductSort::Newest
        } else {
            ProductSort::Id
        }
    }
}

/// Which publication state a shop listing selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publication {
    Draft,
    Published,
}

/// Shop-scoped listing query, newest `updated_at` first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopProductQuery {
    pub shop_id: Uuid,
    pub publication: Publication,
    pub pagination: Pagination,
}

impl ShopProductQuery {
    pub fn drafts(shop_id: Uuid, pagination: Pagination) -> Self {
        Self {
            shop_id,
            publication: Publication::Draft,
            pagination,
        }
    }

    pub fn published(shop_id: Uuid, pagination: Pagination) -> Self {
        Self {
            shop_id,
            publication: Publication::Published,
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_validation() {
        let mut draft: ProductDraft = serde_json::from_value(json!({
            "name": "Tee",
            "thumb": "tee.png",
            "price": 10.5,
            "quantity": 3,
            "shop_id": Uuid::new_v4(),
            "attributes": {"brand": "X"}
        }))
        .unwrap();
        assert!(draft.validate().is_ok());
        assert!(draft.variations.is_empty());

        draft.price = -1.0;
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));

        draft.price = 1.0;
        draft.name = "  ".to_string();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::RequiredField { .. })
        ));
    }

    #[test]
    fn test_patch_drops_nulls() {
        let patch: ProductPatch =
            serde_json::from_value(json!({"name": null, "price": 12.0})).unwrap();
        assert!(patch.name.is_none());
        assert_eq!(patch.price, Some(12.0));
        assert!(!patch.is_empty());
        assert!(ProductPatch::default().is_empty());
    }

    #[test]
    fn test_sort_from_param() {
        assert_eq!(ProductSort::from_param("ctime"), ProductSort::Newest);
        assert_eq!(ProductSort::from_param("price"), ProductSort::Id);
    }
}
