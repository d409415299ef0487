//! Shop entity representing a registered seller account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account status of a shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopStatus {
    Active,
    Inactive,
}

impl ShopStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopStatus::Active => "active",
            ShopStatus::Inactive => "inactive",
        }
    }
}

impl std::str::FromStr for ShopStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ShopStatus::Active),
            "inactive" => Ok(ShopStatus::Inactive),
            other => Err(format!("Invalid shop status: {}", other)),
        }
    }
}

/// Role granted to a shop account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShopRole {
    Shop,
    Writer,
    Editor,
    Admin,
}

impl ShopRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopRole::Shop => "SHOP",
            ShopRole::Writer => "WRITER",
            ShopRole::Editor => "EDITOR",
            ShopRole::Admin => "ADMIN",
        }
    }
}

impl std::str::FromStr for ShopRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHOP" => Ok(ShopRole::Shop),
            "WRITER" => Ok(ShopRole::Writer),
            "EDITOR" => Ok(ShopRole::Editor),
            "ADMIN" => Ok(ShopRole::Admin),
            other => Err(format!("Invalid shop role: {}", other)),
        }
    }
}

/// Shop entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// Unique identifier for the shop
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Login email, unique across shops
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account status
    pub status: ShopStatus,

    /// Whether the shop has been verified
    pub verified: bool,

    /// Granted roles
    pub roles: Vec<ShopRole>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shop {
    /// Creates a new active, unverified shop with the `SHOP` role
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            status: ShopStatus::Active,
            verified: false,
            roles: vec![ShopRole::Shop],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ShopStatus::Active
    }

    pub fn has_role(&self, role: ShopRole) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shop_defaults() {
        let shop = Shop::new(
            "Shop A".to_string(),
            "a@shop.dev".to_string(),
            "hash".to_string(),
        );
        assert!(shop.is_active());
        assert!(!shop.verified);
        assert!(shop.has_role(ShopRole::Shop));
        assert!(!shop.has_role(ShopRole::Admin));
        assert_eq!(shop.created_at, shop.updated_at);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let shop = Shop::new("Shop A".into(), "a@shop.dev".into(), "secret-hash".into());
        let json = serde_json::to_string(&shop).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("\"SHOP\""));
    }

    #[test]
    fn test_role_and_status_parsing() {
        assert_eq!("EDITOR".parse::<ShopRole>().unwrap(), ShopRole::Editor);
        assert!("editor".parse::<ShopRole>().is_err());
        assert_eq!("inactive".parse::<ShopStatus>().unwrap(), ShopStatus::Inactive);
        assert_eq!(ShopStatus::Active.as_str(), "active");
    }
}
