pub mod inventory;
pub mod key_token;
pub mod product;
pub mod shop;

pub use inventory::InventoryRepository;
pub use key_token::KeyTokenRepository;
pub use product::ProductRepository;
pub use shop::ShopRepository;

#[cfg(any(test, feature = "testing"))]
pub use inventory::MockInventoryRepository;
#[cfg(any(test, feature = "testing"))]
pub use key_token::MockKeyTokenRepository;
#[cfg(any(test, feature = "testing"))]
pub use product::MockProductRepository;
#[cfg(any(test, feature = "testing"))]
pub use shop::MockShopRepository;
