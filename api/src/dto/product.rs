//! Product payloads; fields keep the `product_` prefix clients send

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use shop_core::domain::value_objects::{ProductDraft, ProductPatch, ProductSort};
use shop_shared::types::Pagination;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "product_type is required"))]
    pub product_type: String,

    #[validate(length(min = 1, message = "product_name is required"))]
    pub product_name: String,

    #[validate(length(min = 1, message = "product_thumb is required"))]
    pub product_thumb: String,

    #[serde(default)]
    pub product_description: Option<String>,

    #[validate(range(min = 0.0, message = "product_price must not be negative"))]
    pub product_price: f64,

    pub product_quantity: u32,

    pub product_attributes: Value,

    #[serde(default)]
    pub product_variations: Vec<Value>,
}

impl CreateProductRequest {
    /// Split into the type tag and a draft owned by `shop_id`
    pub fn into_draft(self, shop_id: Uuid) -> (String, ProductDraft) {
        let draft = ProductDraft {
            name: self.product_name,
            thumb: self.product_thumb,
            description: self.product_description,
            price: self.product_price,
            quantity: self.product_quantity,
            shop_id,
            attributes: self.product_attributes,
            variations: self.product_variations,
        };
        (self.product_type, draft)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "product_type is required"))]
    pub product_type: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "product_name must not be empty"))]
    pub product_name: Option<String>,

    #[serde(default)]
    pub product_thumb: Option<String>,

    #[serde(default)]
    pub product_description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "product_price must not be negative"))]
    pub product_price: Option<f64>,

    #[serde(default)]
    pub product_quantity: Option<u32>,

    #[serde(default)]
    pub product_attributes: Option<Value>,

    #[serde(default)]
    pub product_variations: Option<Vec<Value>>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> (String, ProductPatch) {
        let patch = ProductPatch {
            name: self.product_name,
            thumb: self.product_thumb,
            description: self.product_description,
            price: self.product_price,
            quantity: self.product_quantity,
            variations: self.product_variations,
            attributes: self.product_attributes,
        };
        (self.product_type, patch)
    }
}

/// `?limit=&skip=` for shop listings
#[derive(Debug, Clone, Deserialize)]
pub struct ShopListQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

impl ShopListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_skip(self.skip, self.limit)
    }
}

/// `?limit=&sort=&page=` for the public product list
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_page")]
    pub page: u32,
}

impl ProductListQuery {
    pub fn sort(&self) -> ProductSort {
        ProductSort::from_param(&self.sort)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }
}

fn default_limit() -> u32 {
    50
}

fn default_sort() -> String {
    "ctime".to_string()
}

fn default_page() -> u32 {
    1
}
