//! Mock implementation of ProductRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::product::{normalize_rating, AttributeRecord, Product, ProductType};
use crate::domain::value_objects::{ProductSort, ProductSummary, Publication, ShopProductQuery};
use crate::errors::DomainError;
use shop_shared::types::Pagination;

use super::trait_::{ProductRepository, SEARCH_LIMIT};

/// In-memory product repository; clones share state
///
/// Inserts can be made to fail to exercise partial-failure paths.
#[derive(Clone, Default)]
pub struct MockProductRepository {
    attributes: Arc<RwLock<HashMap<(ProductType, Uuid), AttributeRecord>>>,
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
    fail_attribute_insert: Arc<AtomicBool>,
    fail_product_insert: Arc<AtomicBool>,
}

impl MockProductRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every attribute insert fail
    pub fn fail_attribute_inserts(&self, fail: bool) {
        self.fail_attribute_insert.store(fail, Ordering::SeqCst);
    }

    /// Make every base product insert fail
    pub fn fail_product_inserts(&self, fail: bool) {
        self.fail_product_insert.store(fail, Ordering::SeqCst);
    }

    /// Number of stored attribute records across all types
    pub async fn attribute_count(&self) -> usize {
        self.attributes.read().await.len()
    }

    /// Number of stored base products
    pub async fn product_count(&self) -> usize {
        self.products.read().await.len()
    }

    fn paginate<T>(items: Vec<T>, pagination: Pagination) -> Vec<T> {
        items
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect()
    }

    async fn resolve(&self, mut product: Product) -> Option<Product> {
        let attributes = self.attributes.read().await;
        let record = attributes.get(&(product.product_type, product.attributes_id))?;
        product.attributes = record.attributes.clone();
        Some(product)
    }

    async fn resolve_all(&self, products: Vec<Product>) -> Vec<Product> {
        let mut resolved = Vec::with_capacity(products.len());
        for product in products {
            if let Some(product) = self.resolve(product).await {
                resolved.push(product);
            }
        }
        resolved
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn insert_attributes(
        &self,
        record: AttributeRecord,
    ) -> Result<AttributeRecord, DomainError> {
        if self.fail_attribute_insert.load(Ordering::SeqCst) {
            return Err(DomainError::internal("attribute insert failed"));
        }
        let mut attributes = self.attributes.write().await;
        attributes.insert((record.product_type(), record.id), record.clone());
        Ok(record)
    }

    async fn find_attributes(
        &self,
        product_type: ProductType,
        id: Uuid,
    ) -> Result<Option<AttributeRecord>, DomainError> {
        let attributes = self.attributes.read().await;
        Ok(attributes.get(&(product_type, id)).cloned())
    }

    async fn update_attributes(&self, record: &AttributeRecord) -> Result<bool, DomainError> {
        let mut attributes = self.attributes.write().await;
        match attributes.get_mut(&(record.product_type(), record.id)) {
            Some(stored) if stored.shop_id == record.shop_id => {
                stored.attributes = record.attributes.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_attributes(
        &self,
        product_type: ProductType,
        id: Uuid,
    ) -> Result<bool, DomainError> {
        let mut attributes = self.attributes.write().await;
        Ok(attributes.remove(&(product_type, id)).is_some())
    }

    async fn insert_product(&self, mut product: Product) -> Result<Product, DomainError> {
        if self.fail_product_insert.load(Ordering::SeqCst) {
            return Err(DomainError::internal("product insert failed"));
        }
        if !self
            .attributes
            .read()
            .await
            .contains_key(&(product.product_type, product.attributes_id))
        {
            return Err(DomainError::internal("attributes record does not exist"));
        }
        product.ratings_average = normalize_rating(product.ratings_average);
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(&self, product: &Product) -> Result<bool, DomainError> {
        let mut products = self.products.write().await;
        match products.get_mut(&product.id) {
            Some(stored) if stored.shop_id == product.shop_id => {
                *stored = product.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_product(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let product = self.products.read().await.get(&id).cloned();
        match product {
            Some(product) => Ok(self.resolve(product).await),
            None => Ok(None),
        }
    }

    async fn set_published(
        &self,
        shop_id: Uuid,
        product_id: Uuid,
        published: bool,
    ) -> Result<bool, DomainError> {
        let mut products = self.products.write().await;
        match products.get_mut(&product_id) {
            Some(product) if product.shop_id == shop_id => {
                if product.is_published == published && product.is_draft != published {
                    return Ok(false);
                }
                if published {
                    product.publish();
                } else {
                    product.unpublish();
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_for_shop(&self, query: ShopProductQuery) -> Result<Vec<Product>, DomainError> {
        let mut matching: Vec<Product> = self
            .products
            .read()
            .await
            .values()
            .filter(|p| p.shop_id == query.shop_id)
            .filter(|p| match query.publication {
                Publication::Draft => p.is_draft,
                Publication::Published => p.is_published,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let page = Self::paginate(matching, query.pagination);
        Ok(self.resolve_all(page).await)
    }

    async fn search_published(&self, keyword: &str) -> Result<Vec<Product>, DomainError> {
        let mut matching: Vec<Product> = self
            .products
            .read()
            .await
            .values()
            .filter(|p| p.is_published && p.matches_keyword(keyword))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        matching.truncate(SEARCH_LIMIT as usize);
        Ok(self.resolve_all(matching).await)
    }

    async fn find_published(
        &self,
        sort: ProductSort,
        pagination: Pagination,
    ) -> Result<Vec<ProductSummary>, DomainError> {
        let mut published: Vec<Product> = self
            .products
            .read()
            .await
            .values()
            .filter(|p| p.is_published)
            .cloned()
            .collect();
        match sort {
            ProductSort::Newest => published.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ProductSort::Id => published.sort_by(|a, b| a.id.cmp(&b.id)),
        }

        Ok(Self::paginate(published, pagination)
            .into_iter()
            .map(|p| ProductSummary {
                id: p.id,
                name: p.name,
                price: p.price,
                thumb: p.thumb,
            })
            .collect())
    }
}
