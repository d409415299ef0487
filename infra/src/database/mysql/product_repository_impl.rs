//! MySQL implementation of the ProductRepository trait.
//!
//! Base products live in `products`; each product type keeps its
//! attributes in its own table (`product_clothing`, `product_electronics`,
//! `product_furniture`), keyed by the id the product row references.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::MySqlPool;
use uuid::Uuid;

use shop_core::domain::entities::product::{
    normalize_rating, AttributeRecord, ClothingAttributes, ElectronicsAttributes,
    FurnitureAttributes, Product, ProductAttributes, ProductType,
};
use shop_core::domain::value_objects::{
    ProductSort, ProductSummary, Publication, ShopProductQuery,
};
use shop_core::errors::DomainError;
use shop_core::repositories::product::{ProductRepository, SEARCH_LIMIT};
use shop_shared::types::Pagination;

use super::{column, contains_pattern, db_error, uuid_column};

const PRODUCT_COLUMNS: &str = "id, name, thumb, description, slug, price, quantity, product_type, \
     shop_id, attributes_id, ratings_average, variations, is_draft, is_published, created_at, updated_at";

/// Table and column names of one attribute type
struct AttributeTable {
    table: &'static str,
    columns: [&'static str; 3],
}

fn attribute_table(product_type: ProductType) -> AttributeTable {
    match product_type {
        ProductType::Clothing => AttributeTable {
            table: "product_clothing",
            columns: ["brand", "size", "material"],
        },
        ProductType::Electronics => AttributeTable {
            table: "product_electronics",
            columns: ["manufacturer", "model", "color"],
        },
        ProductType::Furniture => AttributeTable {
            table: "product_furniture",
            columns: ["brand", "size", "material"],
        },
    }
}

/// Column values in `AttributeTable::columns` order
fn attribute_values(attributes: &ProductAttributes) -> (String, Option<String>, Option<String>) {
    match attributes {
        ProductAttributes::Clothing(a) => (a.brand.clone(), a.size.clone(), a.material.clone()),
        ProductAttributes::Electronics(a) => {
            (a.manufacturer.clone(), a.model.clone(), a.color.clone())
        }
        ProductAttributes::Furniture(a) => (a.brand.clone(), a.size.clone(), a.material.clone()),
    }
}

fn row_to_attributes(
    product_type: ProductType,
    row: &MySqlRow,
) -> Result<ProductAttributes, DomainError> {
    let [first, second, third] = attribute_table(product_type).columns;
    let first: String = column(row, first)?;
    let second: Option<String> = column(row, second)?;
    let third: Option<String> = column(row, third)?;

    Ok(match product_type {
        ProductType::Clothing => ProductAttributes::Clothing(ClothingAttributes {
            brand: first,
            size: second,
            material: third,
        }),
        ProductType::Electronics => ProductAttributes::Electronics(ElectronicsAttributes {
            manufacturer: first,
            model: second,
            color: third,
        }),
        ProductType::Furniture => ProductAttributes::Furniture(FurnitureAttributes {
            brand: first,
            size: second,
            material: third,
        }),
    })
}

/// MySQL implementation of ProductRepository
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Map a `products` row; `attributes` is filled in by `resolve`
    fn row_to_product(row: &MySqlRow) -> Result<Product, DomainError> {
        let product_type: String = column(row, "product_type")?;
        let product_type = product_type
            .parse::<ProductType>()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        let variations: Json<Vec<Value>> = column(row, "variations")?;

        Ok(Product {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            thumb: column(row, "thumb")?,
            description: column(row, "description")?,
            slug: column(row, "slug")?,
            price: column(row, "price")?,
            quantity: column(row, "quantity")?,
            product_type,
            shop_id: uuid_column(row, "shop_id")?,
            attributes_id: uuid_column(row, "attributes_id")?,
            attributes: empty_attributes(product_type),
            ratings_average: column(row, "ratings_average")?,
            variations: variations.0,
            is_draft: column(row, "is_draft")?,
            is_published: column(row, "is_published")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    /// Attach the attribute record; products whose record is missing are dropped
    async fn resolve(&self, mut product: Product) -> Result<Option<Product>, DomainError> {
        match self
            .find_attributes(product.product_type, product.attributes_id)
            .await?
        {
            Some(record) => {
                product.attributes = record.attributes;
                Ok(Some(product))
            }
            None => {
                tracing::warn!(product_id = %product.id, "Product references a missing attribute record");
                Ok(None)
            }
        }
    }

    async fn resolve_all(&self, rows: Vec<MySqlRow>) -> Result<Vec<Product>, DomainError> {
        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(product) = self.resolve(Self::row_to_product(row)?).await? {
                products.push(product);
            }
        }
        Ok(products)
    }
}

fn empty_attributes(product_type: ProductType) -> ProductAttributes {
    match product_type {
        ProductType::Clothing => ProductAttributes::Clothing(ClothingAttributes {
            brand: String::new(),
            size: None,
            material: None,
        }),
        ProductType::Electronics => ProductAttributes::Electronics(ElectronicsAttributes {
            manufacturer: String::new(),
            model: None,
            color: None,
        }),
        ProductType::Furniture => ProductAttributes::Furniture(FurnitureAttributes {
            brand: String::new(),
            size: None,
            material: None,
        }),
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn insert_attributes(
        &self,
        record: AttributeRecord,
    ) -> Result<AttributeRecord, DomainError> {
        let AttributeTable { table, columns } = attribute_table(record.product_type());
        let (first, second, third) = attribute_values(&record.attributes);
        let now = Utc::now();
        let query = format!(
            "INSERT INTO {} (id, shop_id, {}, {}, {}, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
            table, columns[0], columns[1], columns[2]
        );

        sqlx::query(&query)
            .bind(record.id.to_string())
            .bind(record.shop_id.to_string())
            .bind(first)
            .bind(second)
            .bind(third)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to insert product attributes"))?;

        Ok(record)
    }

    async fn find_attributes(
        &self,
        product_type: ProductType,
        id: Uuid,
    ) -> Result<Option<AttributeRecord>, DomainError> {
        let AttributeTable { table, columns } = attribute_table(product_type);
        let query = format!(
            "SELECT id, shop_id, {}, {}, {} FROM {} WHERE id = ? LIMIT 1",
            columns[0], columns[1], columns[2], table
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find product attributes"))?;

        match row {
            Some(row) => Ok(Some(AttributeRecord {
                id: uuid_column(&row, "id")?,
                shop_id: uuid_column(&row, "shop_id")?,
                attributes: row_to_attributes(product_type, &row)?,
            })),
            None => Ok(None),
        }
    }

    async fn update_attributes(&self, record: &AttributeRecord) -> Result<bool, DomainError> {
        let AttributeTable { table, columns } = attribute_table(record.product_type());
        let (first, second, third) = attribute_values(&record.attributes);
        let query = format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, updated_at = ? WHERE id = ? AND shop_id = ?",
            table, columns[0], columns[1], columns[2]
        );

        let result = sqlx::query(&query)
            .bind(first)
            .bind(second)
            .bind(third)
            .bind(Utc::now())
            .bind(record.id.to_string())
            .bind(record.shop_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update product attributes"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_attributes(
        &self,
        product_type: ProductType,
        id: Uuid,
    ) -> Result<bool, DomainError> {
        let query = format!("DELETE FROM {} WHERE id = ?", attribute_table(product_type).table);
        let result = sqlx::query(&query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete product attributes"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_product(&self, mut product: Product) -> Result<Product, DomainError> {
        product.ratings_average = normalize_rating(product.ratings_average);
        let query = format!(
            "INSERT INTO products ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            PRODUCT_COLUMNS
        );

        sqlx::query(&query)
            .bind(product.id.to_string())
            .bind(&product.name)
            .bind(&product.thumb)
            .bind(&product.description)
            .bind(&product.slug)
            .bind(product.price)
            .bind(product.quantity)
            .bind(product.product_type.as_str())
            .bind(product.shop_id.to_string())
            .bind(product.attributes_id.to_string())
            .bind(product.ratings_average)
            .bind(Json(&product.variations))
            .bind(product.is_draft)
            .bind(product.is_published)
            .bind(product.created_at)
            .bind(product.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to insert product"))?;

        Ok(product)
    }

    async fn update_product(&self, product: &Product) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE products
            SET name = ?, thumb = ?, description = ?, slug = ?, price = ?, quantity = ?,
                variations = ?, updated_at = ?
            WHERE id = ? AND shop_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&product.name)
            .bind(&product.thumb)
            .bind(&product.description)
            .bind(&product.slug)
            .bind(product.price)
            .bind(product.quantity)
            .bind(Json(&product.variations))
            .bind(product.updated_at)
            .bind(product.id.to_string())
            .bind(product.shop_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update product"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_product(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete product"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let query = format!("SELECT {} FROM products WHERE id = ? LIMIT 1", PRODUCT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find product"))?;

        match row {
            Some(row) => self.resolve(Self::row_to_product(&row)?).await,
            None => Ok(None),
        }
    }

    async fn set_published(
        &self,
        shop_id: Uuid,
        product_id: Uuid,
        published: bool,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE products
            SET is_draft = ?, is_published = ?, updated_at = ?
            WHERE id = ? AND shop_id = ? AND is_published <> ?
        "#;

        let result = sqlx::query(query)
            .bind(!published)
            .bind(published)
            .bind(Utc::now())
            .bind(product_id.to_string())
            .bind(shop_id.to_string())
            .bind(published)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to set publication state"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_for_shop(&self, query: ShopProductQuery) -> Result<Vec<Product>, DomainError> {
        let flag = match query.publication {
            Publication::Draft => "is_draft",
            Publication::Published => "is_published",
        };
        let sql = format!(
            "SELECT {} FROM products WHERE shop_id = ? AND {} = TRUE ORDER BY updated_at DESC LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS, flag
        );

        let rows = sqlx::query(&sql)
            .bind(query.shop_id.to_string())
            .bind(query.pagination.limit())
            .bind(query.pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list shop products"))?;

        self.resolve_all(rows).await
    }

    async fn search_published(&self, keyword: &str) -> Result<Vec<Product>, DomainError> {
        let pattern = contains_pattern(keyword);
        let sql = format!(
            "SELECT {} FROM products WHERE is_published = TRUE AND (name LIKE ? OR description LIKE ?) \
             ORDER BY updated_at DESC LIMIT ?",
            PRODUCT_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .bind(SEARCH_LIMIT)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to search products"))?;

        self.resolve_all(rows).await
    }

    async fn find_published(
        &self,
        sort: ProductSort,
        pagination: Pagination,
    ) -> Result<Vec<ProductSummary>, DomainError> {
        let order = match sort {
            ProductSort::Newest => "created_at DESC",
            ProductSort::Id => "id ASC",
        };
        let sql = format!(
            "SELECT id, name, price, thumb FROM products WHERE is_published = TRUE ORDER BY {} LIMIT ? OFFSET ?",
            order
        );

        let rows = sqlx::query(&sql)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list products"))?;

        rows.iter()
            .map(|row| {
                Ok(ProductSummary {
                    id: uuid_column(row, "id")?,
                    name: column(row, "name")?,
                    price: column(row, "price")?,
                    thumb: column(row, "thumb")?,
                })
            })
            .collect()
    }
}
