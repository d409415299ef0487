//! MySQL repository implementations
//!
//! Ids are stored as `CHAR(36)` strings and timestamps as `TIMESTAMP(6)`.

mod inventory_repository_impl;
mod key_token_repository_impl;
mod product_repository_impl;
mod shop_repository_impl;

pub use inventory_repository_impl::MySqlInventoryRepository;
pub use key_token_repository_impl::MySqlKeyTokenRepository;
pub use product_repository_impl::MySqlProductRepository;
pub use shop_repository_impl::MySqlShopRepository;

use shop_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

/// Map a query failure to an internal domain error, keeping the context
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!("{}: {}", context, e);
        DomainError::Internal {
            message: format!("{}: {}", context, e),
        }
    }
}

/// Read a column, reporting which one failed
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

/// Read a `CHAR(36)` id column
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    parse_uuid(&raw, name)
}

pub(crate) fn parse_uuid(raw: &str, name: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", name, e),
    })
}

/// Whether the error is a duplicate-key violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

/// `LIKE` pattern matching `keyword` anywhere, with wildcards escaped
pub(crate) fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
