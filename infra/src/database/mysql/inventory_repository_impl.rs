//! MySQL implementation of the InventoryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::MySqlPool;
use uuid::Uuid;

use shop_core::domain::entities::inventory::Inventory;
use shop_core::errors::DomainError;
use shop_core::repositories::InventoryRepository;

use super::{column, db_error, uuid_column};

pub struct MySqlInventoryRepository {
    pool: MySqlPool,
}

impl MySqlInventoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_inventory(row: &MySqlRow) -> Result<Inventory, DomainError> {
        let reservations: Json<Vec<Value>> = column(row, "reservations")?;
        Ok(Inventory {
            id: uuid_column(row, "id")?,
            product_id: uuid_column(row, "product_id")?,
            shop_id: uuid_column(row, "shop_id")?,
            location: column(row, "location")?,
            stock: column(row, "stock")?,
            reservations: reservations.0,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl InventoryRepository for MySqlInventoryRepository {
    async fn insert(&self, inventory: Inventory) -> Result<Inventory, DomainError> {
        let query = r#"
            INSERT INTO inventories (
                id, product_id, shop_id, location, stock, reservations, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(inventory.id.to_string())
            .bind(inventory.product_id.to_string())
            .bind(inventory.shop_id.to_string())
            .bind(&inventory.location)
            .bind(inventory.stock)
            .bind(Json(&inventory.reservations))
            .bind(inventory.created_at)
            .bind(inventory.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to insert inventory"))?;

        Ok(inventory)
    }

    async fn find_by_product(&self, product_id: Uuid) -> Result<Option<Inventory>, DomainError> {
        let query = r#"
            SELECT id, product_id, shop_id, location, stock, reservations, created_at, updated_at
            FROM inventories
            WHERE product_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(product_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find inventory"))?;

        row.as_ref().map(Self::row_to_inventory).transpose()
    }

    async fn delete_by_product(&self, product_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM inventories WHERE product_id = ?")
            .bind(product_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete inventory"))?;

        Ok(result.rows_affected())
    }
}
