//! MySQL implementation of the ShopRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::MySqlPool;
use uuid::Uuid;

use shop_core::domain::entities::shop::{Shop, ShopRole, ShopStatus};
use shop_core::errors::{AuthError, DomainError};
use shop_core::repositories::ShopRepository;

use super::{column, db_error, is_unique_violation, uuid_column};

const SHOP_COLUMNS: &str =
    "id, name, email, password_hash, status, verified, roles, created_at, updated_at";

/// MySQL implementation of ShopRepository
///
/// Email uniqueness is enforced by the `uk_shops_email` index.
pub struct MySqlShopRepository {
    pool: MySqlPool,
}

impl MySqlShopRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_shop(row: &MySqlRow) -> Result<Shop, DomainError> {
        let status: String = column(row, "status")?;
        let status = status
            .parse::<ShopStatus>()
            .map_err(|message| DomainError::Internal { message })?;
        let roles: Json<Vec<ShopRole>> = column(row, "roles")?;

        Ok(Shop {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            password_hash: column(row, "password_hash")?,
            status,
            verified: column(row, "verified")?,
            roles: roles.0,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    async fn find_one(&self, filter: &str, value: String) -> Result<Option<Shop>, DomainError> {
        let query = format!("SELECT {} FROM shops WHERE {} = ? LIMIT 1", SHOP_COLUMNS, filter);
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find shop"))?;

        row.as_ref().map(Self::row_to_shop).transpose()
    }
}

#[async_trait]
impl ShopRepository for MySqlShopRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Shop>, DomainError> {
        self.find_one("email", email.to_string()).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Shop>, DomainError> {
        self.find_one("id", id.to_string()).await
    }

    async fn create(&self, shop: Shop) -> Result<Shop, DomainError> {
        let query = r#"
            INSERT INTO shops (
                id, name, email, password_hash, status, verified, roles, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(shop.id.to_string())
            .bind(&shop.name)
            .bind(&shop.email)
            .bind(&shop.password_hash)
            .bind(shop.status.as_str())
            .bind(shop.verified)
            .bind(Json(&shop.roles))
            .bind(shop.created_at)
            .bind(shop.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(shop),
            Err(e) if is_unique_violation(&e) => Err(AuthError::ShopAlreadyRegistered.into()),
            Err(e) => Err(db_error("Failed to create shop")(e)),
        }
    }
}
