//! Product service: creation through the factory plus shop-scoped updates,
//! publication and catalogue queries

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use shop_shared::types::Pagination;
use shop_shared::utils::validation::slugify;

use crate::domain::entities::product::{Product, ProductType};
use crate::domain::value_objects::{
    ProductDraft, ProductPatch, ProductSort, ProductSummary, ShopProductQuery,
};
use crate::errors::{DomainError, DomainResult, ProductError};
use crate::repositories::{InventoryRepository, ProductRepository};

use super::factory::ProductFactory;

pub struct ProductService<P, I>
where
    P: ProductRepository,
    I: InventoryRepository,
{
    product_repository: Arc<P>,
    factory: ProductFactory<P, I>,
}

impl<P, I> ProductService<P, I>
where
    P: ProductRepository,
    I: InventoryRepository,
{
    pub fn new(product_repository: Arc<P>, inventory_repository: Arc<I>) -> Self {
        let factory = ProductFactory::new(product_repository.clone(), inventory_repository);
        Self::with_factory(product_repository, factory)
    }

    /// Use a custom factory, e.g. one with extra registered handlers
    pub fn with_factory(product_repository: Arc<P>, factory: ProductFactory<P, I>) -> Self {
        Self {
            product_repository,
            factory,
        }
    }

    /// Create a product of the type named by `type_tag`
    pub async fn create_product(&self, type_tag: &str, draft: ProductDraft) -> DomainResult<Product> {
        self.factory.create_product(type_tag, draft).await
    }

    /// Apply a partial update to one of the shop's products
    ///
    /// Absent fields are left untouched. Attributes in the patch are merged
    /// into the product's type record.
    ///
    /// # Returns
    ///
    /// * `Ok(Product)` - The updated product
    /// * `Err(ProductError::ProductNotFound)` - Missing or owned by another shop
    /// * `Err(ProductError::AttributeTypeMismatch)` - `type_tag` is not the product's type
    pub async fn update_product(
        &self,
        type_tag: &str,
        product_id: Uuid,
        shop_id: Uuid,
        patch: ProductPatch,
    ) -> DomainResult<Product> {
        let product_type: ProductType = type_tag.parse()?;
        patch.validate()?;

        let mut product = self.owned_product(shop_id, product_id).await?;
        if product.product_type != product_type {
            return Err(ProductError::AttributeTypeMismatch {
                expected: product.product_type.to_string(),
                actual: product_type.to_string(),
            }
            .into());
        }

        if let Some(attributes_patch) = &patch.attributes {
            let mut record = self
                .product_repository
                .find_attributes(product_type, product.attributes_id)
                .await?
                .ok_or(ProductError::ProductNotFound)?;
            record.attributes = record.attributes.merge(attributes_patch)?;
            if !self.product_repository.update_attributes(&record).await? {
                return Err(ProductError::ProductNotFound.into());
            }
            product.attributes = record.attributes;
        }

        if let Some(name) = patch.name {
            product.slug = slugify(&name);
            product.name = name;
        }
        if let Some(thumb) = patch.thumb {
            product.thumb = thumb;
        }
        if let Some(description) = patch.description {
            product.description = Some(description);
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(quantity) = patch.quantity {
            product.quantity = quantity;
        }
        if let Some(variations) = patch.variations {
            product.variations = variations;
        }
        product.updated_at = Utc::now();

        if !self.product_repository.update_product(&product).await? {
            return Err(ProductError::ProductNotFound.into());
        }
        info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Publish one of the shop's products; `Ok(false)` if it already was
    pub async fn publish_product(&self, shop_id: Uuid, product_id: Uuid) -> DomainResult<bool> {
        self.set_published(shop_id, product_id, true).await
    }

    /// Return one of the shop's products to draft; `Ok(false)` if it already was
    pub async fn unpublish_product(&self, shop_id: Uuid, product_id: Uuid) -> DomainResult<bool> {
        self.set_published(shop_id, product_id, false).await
    }

    pub async fn find_all_drafts_for_shop(
        &self,
        shop_id: Uuid,
        pagination: Pagination,
    ) -> DomainResult<Vec<Product>> {
        self.product_repository
            .find_for_shop(ShopProductQuery::drafts(shop_id, pagination.validate()))
            .await
    }

    pub async fn find_all_published_for_shop(
        &self,
        shop_id: Uuid,
        pagination: Pagination,
    ) -> DomainResult<Vec<Product>> {
        self.product_repository
            .find_for_shop(ShopProductQuery::published(shop_id, pagination.validate()))
            .await
    }

    /// Published products whose name or description contains `keyword`
    pub async fn search_products(&self, keyword: &str) -> DomainResult<Vec<Product>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }
        self.product_repository.search_published(keyword).await
    }

    pub async fn find_all_products(
        &self,
        sort: ProductSort,
        pagination: Pagination,
    ) -> DomainResult<Vec<ProductSummary>> {
        self.product_repository
            .find_published(sort, pagination.validate())
            .await
    }

    pub async fn find_product(&self, product_id: Uuid) -> DomainResult<Product> {
        self.product_repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ProductError::ProductNotFound.into())
    }

    async fn set_published(
        &self,
        shop_id: Uuid,
        product_id: Uuid,
        published: bool,
    ) -> DomainResult<bool> {
        self.owned_product(shop_id, product_id).await?;
        let changed = self
            .product_repository
            .set_published(shop_id, product_id, published)
            .await?;
        debug!(product_id = %product_id, published, changed, "Publication state set");
        Ok(changed)
    }

    async fn owned_product(&self, shop_id: Uuid, product_id: Uuid) -> DomainResult<Product> {
        match self.product_repository.find_by_id(product_id).await? {
            Some(product) if product.is_owned_by(shop_id) => Ok(product),
            _ => Err(DomainError::from(ProductError::ProductNotFound)),
        }
    }
}
