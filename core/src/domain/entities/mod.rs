//! Domain entities representing core business objects.

pub mod inventory;
pub mod key_token;
pub mod product;
pub mod shop;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use inventory::{Inventory, DEFAULT_LOCATION};
pub use key_token::{KeyToken, DEFAULT_USED_TOKEN_HISTORY_LIMIT};
pub use product::{
    normalize_rating, AttributeRecord, ClothingAttributes, ElectronicsAttributes,
    FurnitureAttributes, Product, ProductAttributes, ProductType, DEFAULT_RATINGS_AVERAGE,
};
pub use shop::{Shop, ShopRole, ShopStatus};
pub use token::{Claims, KeyPair, TokenPair, TokenPayload, TokenType};
