//! Product catalogue entities: the base product, its type tag and the
//! per-type attribute records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::ProductError;

/// Ratings average given to new products
pub const DEFAULT_RATINGS_AVERAGE: f64 = 4.5;

/// Product category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Clothing,
    Electronics,
    Furniture,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [
        ProductType::Clothing,
        ProductType::Electronics,
        ProductType::Furniture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Clothing => "Clothing",
            ProductType::Electronics => "Electronics",
            ProductType::Furniture => "Furniture",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductType {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Clothing" => Ok(ProductType::Clothing),
            "Electronics" => Ok(ProductType::Electronics),
            "Furniture" => Ok(ProductType::Furniture),
            other => Err(ProductError::InvalidProductType {
                tag: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingAttributes {
    pub brand: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicsAttributes {
    pub manufacturer: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnitureAttributes {
    pub brand: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
}

/// Type-specific product attributes
///
/// Serialized without a tag; the owning product's `product_type` says which
/// variant a JSON object belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProductAttributes {
    Clothing(ClothingAttributes),
    Electronics(ElectronicsAttributes),
    Furniture(FurnitureAttributes),
}

impl ProductAttributes {
    /// Parses attributes of the given type from a JSON object
    pub fn from_value(product_type: ProductType, value: Value) -> Result<Self, ProductError> {
        let invalid = |e: serde_json::Error| ProductError::InvalidAttributes {
            reason: e.to_string(),
        };
        if !value.is_object() {
            return Err(ProductError::InvalidAttributes {
                reason: "attributes must be an object".to_string(),
            });
        }
        match product_type {
            ProductType::Clothing => serde_json::from_value(value)
                .map(ProductAttributes::Clothing)
                .map_err(invalid),
            ProductType::Electronics => serde_json::from_value(value)
                .map(ProductAttributes::Electronics)
                .map_err(invalid),
            ProductType::Furniture => serde_json::from_value(value)
                .map(ProductAttributes::Furniture)
                .map_err(invalid),
        }
    }

    pub fn product_type(&self) -> ProductType {
        match self {
            ProductAttributes::Clothing(_) => ProductType::Clothing,
            ProductAttributes::Electronics(_) => ProductType::Electronics,
            ProductAttributes::Furniture(_) => ProductType::Furniture,
        }
    }

    pub fn to_value(&self) -> Value {
        // Plain structs of strings always serialize
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Overlays the non-null fields of `patch` and re-validates
    pub fn merge(&self, patch: &Value) -> Result<Self, ProductError> {
        let Value::Object(patch) = patch else {
            return Err(ProductError::InvalidAttributes {
                reason: "attributes must be an object".to_string(),
            });
        };
        let mut merged = self.to_value();
        if let Value::Object(fields) = &mut merged {
            for (key, value) in patch {
                if !value.is_null() {
                    fields.insert(key.clone(), value.clone());
                }
            }
        }
        Self::from_value(self.product_type(), merged)
    }
}

/// A stored attribute record, owned by a shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRecord {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub attributes: ProductAttributes,
}

impl AttributeRecord {
    pub fn new(shop_id: Uuid, attributes: ProductAttributes) -> Self {
        Self {
            id: Uuid::new_v4(),
            shop_id,
            attributes,
        }
    }

    pub fn product_type(&self) -> ProductType {
        self.attributes.product_type()
    }
}

/// Base product record with its attributes resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub thumb: String,
    pub description: Option<String>,
    pub slug: String,
    pub price: f64,
    pub quantity: u32,
    pub product_type: ProductType,
    pub shop_id: Uuid,
    pub attributes_id: Uuid,
    pub attributes: ProductAttributes,
    pub ratings_average: f64,
    pub variations: Vec<Value>,
    pub is_draft: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_owned_by(&self, shop_id: Uuid) -> bool {
        self.shop_id == shop_id
    }

    pub fn publish(&mut self) {
        self.is_draft = false;
        self.is_published = true;
        self.updated_at = Utc::now();
    }

    pub fn unpublish(&mut self) {
        self.is_draft = true;
        self.is_published = false;
        self.updated_at = Utc::now();
    }

    /// Whether the keyword occurs in the name or description, ignoring case
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Clamps a rating into 1..=5 and rounds it to one decimal
pub fn normalize_rating(value: f64) -> f64 {
    (value.clamp(1.0, 5.0) * 10.0).round() / 10.0
}
