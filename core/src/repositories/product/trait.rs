//! Product repository trait covering base product records and the
//! per-type attribute records they reference.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::product::{AttributeRecord, Product, ProductType};
use crate::domain::value_objects::{ProductSort, ProductSummary, ShopProductQuery};
use crate::errors::DomainError;
use shop_shared::types::Pagination;

/// Most rows a keyword search returns
pub const SEARCH_LIMIT: u32 = 50;

/// Repository trait for product persistence operations
///
/// Products returned by the `find_*` methods carry their attributes
/// resolved from the matching type record.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a type attribute record
    async fn insert_attributes(&self, record: AttributeRecord)
        -> Result<AttributeRecord, DomainError>;

    /// Find a type attribute record
    async fn find_attributes(
        &self,
        product_type: ProductType,
        id: Uuid,
    ) -> Result<Option<AttributeRecord>, DomainError>;

    /// Replace the attributes of an existing record owned by the record's shop
    ///
    /// Returns `Ok(false)` when no matching record exists.
    async fn update_attributes(&self, record: &AttributeRecord) -> Result<bool, DomainError>;

    /// Delete a type attribute record
    async fn delete_attributes(
        &self,
        product_type: ProductType,
        id: Uuid,
    ) -> Result<bool, DomainError>;

    /// Insert a base product; its `attributes_id` must reference a stored record
    ///
    /// `ratings_average` is stored normalized to 1..=5 with one decimal.
    async fn insert_product(&self, product: Product) -> Result<Product, DomainError>;

    /// Overwrite the base fields of a product
    async fn update_product(&self, product: &Product) -> Result<bool, DomainError>;

    /// Delete a base product
    async fn delete_product(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Find a product with its attributes resolved
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Set the draft/published flags of a shop's product
    ///
    /// Returns whether a row changed; `Ok(false)` covers both a missing
    /// product and one already in the requested state.
    async fn set_published(
        &self,
        shop_id: Uuid,
        product_id: Uuid,
        published: bool,
    ) -> Result<bool, DomainError>;

    /// Shop listing of drafts or published products, newest update first
    async fn find_for_shop(&self, query: ShopProductQuery) -> Result<Vec<Product>, DomainError>;

    /// Published products whose name or description contains `keyword`,
    /// most recently updated first and capped at [`SEARCH_LIMIT`]
    async fn search_published(&self, keyword: &str) -> Result<Vec<Product>, DomainError>;

    /// Published product summaries
    async fn find_published(
        &self,
        sort: ProductSort,
        pagination: Pagination,
    ) -> Result<Vec<ProductSummary>, DomainError>;
}
