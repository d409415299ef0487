//! Mock implementation of InventoryRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::inventory::Inventory;
use crate::errors::DomainError;

use super::trait_::InventoryRepository;

/// In-memory inventory repository; clones share state
#[derive(Clone, Default)]
pub struct MockInventoryRepository {
    rows: Arc<Mutex<Vec<Inventory>>>,
    fail_insert: Arc<AtomicBool>,
}

impl MockInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every insert fail
    pub fn fail_inserts(&self, fail: bool) {
        self.fail_insert.store(fail, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
    }

    fn lock_error() -> DomainError {
        DomainError::internal("inventory store poisoned")
    }
}

#[async_trait]
impl InventoryRepository for MockInventoryRepository {
    async fn insert(&self, inventory: Inventory) -> Result<Inventory, DomainError> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(DomainError::internal("inventory insert failed"));
        }
        let mut rows = self.rows.lock().map_err(|_| Self::lock_error())?;
        rows.push(inventory.clone());
        Ok(inventory)
    }

    async fn find_by_product(&self, product_id: Uuid) -> Result<Option<Inventory>, DomainError> {
        let rows = self.rows.lock().map_err(|_| Self::lock_error())?;
        Ok(rows.iter().find(|r| r.product_id == product_id).cloned())
    }

    async fn delete_by_product(&self, product_id: Uuid) -> Result<u64, DomainError> {
        let mut rows = self.rows.lock().map_err(|_| Self::lock_error())?;
        let before = rows.len();
        rows.retain(|r| r.product_id != product_id);
        Ok((before - rows.len()) as u64)
    }
}
