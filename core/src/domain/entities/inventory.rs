//! Inventory entity tracking stock for a product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Location recorded when none is known
pub const DEFAULT_LOCATION: &str = "unKnowned";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: Uuid,
    pub product_id: Uuid,
    pub shop_id: Uuid,
    pub location: String,
    pub stock: u32,
    pub reservations: Vec<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Inventory {
    /// Initial stock row written alongside a new product
    pub fn initial(product_id: Uuid, shop_id: Uuid, stock: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            product_id,
            shop_id,
            location: DEFAULT_LOCATION.to_string(),
            stock,
            reservations: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_inventory() {
        let product_id = Uuid::new_v4();
        let inventory = Inventory::initial(product_id, Uuid::new_v4(), 12);
        assert_eq!(inventory.product_id, product_id);
        assert_eq!(inventory.stock, 12);
        assert_eq!(inventory.location, "unKnowned");
        assert!(inventory.reservations.is_empty());
    }
}
