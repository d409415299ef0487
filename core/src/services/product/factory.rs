//! Product factory: dispatches creation by product type tag

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, error, info};
use uuid::Uuid;

use shop_shared::utils::validation::slugify;

use crate::domain::entities::inventory::Inventory;
use crate::domain::entities::product::{
    AttributeRecord, Product, ProductAttributes, ProductType, DEFAULT_RATINGS_AVERAGE,
};
use crate::domain::value_objects::ProductDraft;
use crate::errors::{DomainResult, ProductError};
use crate::repositories::{InventoryRepository, ProductRepository};

/// Parses the type-specific attributes of a product payload
pub type AttributeHandler = fn(Value) -> Result<ProductAttributes, ProductError>;

fn clothing_handler(value: Value) -> Result<ProductAttributes, ProductError> {
    ProductAttributes::from_value(ProductType::Clothing, value)
}

fn electronics_handler(value: Value) -> Result<ProductAttributes, ProductError> {
    ProductAttributes::from_value(ProductType::Electronics, value)
}

fn furniture_handler(value: Value) -> Result<ProductAttributes, ProductError> {
    ProductAttributes::from_value(ProductType::Furniture, value)
}

/// Creates products of every registered type
///
/// Creation writes the attribute record, then the base product, then the
/// initial inventory row. When a later write fails the earlier ones are
/// deleted again.
pub struct ProductFactory<P, I>
where
    P: ProductRepository,
    I: InventoryRepository,
{
    product_repository: Arc<P>,
    inventory_repository: Arc<I>,
    registry: HashMap<ProductType, AttributeHandler>,
}

impl<P, I> ProductFactory<P, I>
where
    P: ProductRepository,
    I: InventoryRepository,
{
    /// Factory with handlers for every built-in product type
    pub fn new(product_repository: Arc<P>, inventory_repository: Arc<I>) -> Self {
        let mut factory = Self::empty(product_repository, inventory_repository);
        factory.register(ProductType::Clothing, clothing_handler);
        factory.register(ProductType::Electronics, electronics_handler);
        factory.register(ProductType::Furniture, furniture_handler);
        factory
    }

    /// Factory with no registered handlers
    pub fn empty(product_repository: Arc<P>, inventory_repository: Arc<I>) -> Self {
        Self {
            product_repository,
            inventory_repository,
            registry: HashMap::new(),
        }
    }

    /// Register or replace the handler of a product type
    pub fn register(&mut self, product_type: ProductType, handler: AttributeHandler) {
        self.registry.insert(product_type, handler);
    }

    pub fn is_registered(&self, product_type: ProductType) -> bool {
        self.registry.contains_key(&product_type)
    }

    /// Create a product of the type named by `type_tag`
    ///
    /// # Returns
    ///
    /// * `Ok(Product)` - The stored product with its attributes
    /// * `Err(ProductError)` - Unknown tag, invalid payload, or a failed
    ///   write; nothing is left behind in any of these cases
    pub async fn create_product(&self, type_tag: &str, draft: ProductDraft) -> DomainResult<Product> {
        let product_type: ProductType = type_tag.parse()?;
        let handler = self
            .registry
            .get(&product_type)
            .ok_or_else(|| ProductError::MissingHandler {
                product_type: product_type.to_string(),
            })?;

        draft.validate()?;
        let attributes = handler(draft.attributes.clone())?;
        if attributes.product_type() != product_type {
            return Err(ProductError::AttributeTypeMismatch {
                expected: product_type.to_string(),
                actual: attributes.product_type().to_string(),
            }
            .into());
        }

        self.store(product_type, attributes, draft).await
    }

    async fn store(
        &self,
        product_type: ProductType,
        attributes: ProductAttributes,
        draft: ProductDraft,
    ) -> DomainResult<Product> {
        let record = self
            .product_repository
            .insert_attributes(AttributeRecord::new(draft.shop_id, attributes))
            .await
            .map_err(|e| {
                error!("Failed to insert {} attributes: {}", product_type, e);
                ProductError::CreateFailed {
                    stage: product_type.to_string(),
                }
            })?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            slug: slugify(&draft.name),
            name: draft.name,
            thumb: draft.thumb,
            description: draft.description,
            price: draft.price,
            quantity: draft.quantity,
            product_type,
            shop_id: draft.shop_id,
            attributes_id: record.id,
            attributes: record.attributes.clone(),
            ratings_average: DEFAULT_RATINGS_AVERAGE,
            variations: draft.variations,
            is_draft: true,
            is_published: false,
            created_at: now,
            updated_at: now,
        };

        let product = match self.product_repository.insert_product(product).await {
            Ok(product) => product,
            Err(e) => {
                error!("Failed to insert product: {}", e);
                self.discard_attributes(product_type, record.id).await;
                return Err(ProductError::CreateFailed {
                    stage: "Product".to_string(),
                }
                .into());
            }
        };

        let inventory = Inventory::initial(product.id, product.shop_id, product.quantity);
        if let Err(e) = self.inventory_repository.insert(inventory).await {
            error!("Failed to insert inventory for product {}: {}", product.id, e);
            self.discard_product(product.id).await;
            self.discard_attributes(product_type, record.id).await;
            return Err(ProductError::CreateFailed {
                stage: "Inventory".to_string(),
            }
            .into());
        }

        info!(product_id = %product.id, shop_id = %product.shop_id, "Created {} product", product_type);
        Ok(product)
    }

    async fn discard_attributes(&self, product_type: ProductType, id: Uuid) {
        match self.product_repository.delete_attributes(product_type, id).await {
            Ok(_) => debug!("Removed orphaned {} attributes {}", product_type, id),
            Err(e) => error!("Could not remove orphaned {} attributes {}: {}", product_type, id, e),
        }
    }

    async fn discard_product(&self, id: Uuid) {
        if let Err(e) = self.product_repository.delete_product(id).await {
            error!("Could not remove orphaned product {}: {}", id, e);
        }
    }
}
